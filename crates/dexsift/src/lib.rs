/*! Unified interface for querying Dalvik program elements.
 *
 * Single import for everything a pass needs: the element contracts, the
 * matcher combinators and predicate library, and the fixture builders for
 * tests. Batteries-included entry point for writing analysis passes.
 */

pub use dexsift_fixture as fixture;
pub use dexsift_match as query;
pub use dexsift_model as model;

pub use dexsift_model::{AccessFlags, Opcode};

pub use dexsift_match::{always, and, not, or, xor, Matcher, Pattern};

pub use dexsift_match::predicates::{class, insn, member, method, ty};

/*! Composable predicates and instruction patterns over Dalvik program elements.
 *
 * Optimization passes keep asking the same shapes of question: "is this a
 * constructor?", "does any static field of this class survive deletion?",
 * "does this body contain new-instance followed by invoke-direct?". Writing
 * a traversal per question buries the intent in loops. This crate expresses
 * each question as a [`Matcher`] value: built once when the pass is defined,
 * evaluated with [`Matcher::matches`] against as many elements as needed,
 * and freely shared across worker threads.
 *
 * Matchers compose: boolean combinators wrap existing matchers, collection
 * quantifiers lift a member-level matcher to a class-level one, and
 * [`Pattern`] matches a contiguous run of instructions. The `predicates`
 * modules provide the named building blocks.
 */

pub mod logic;
pub mod matcher;
pub mod predicates;
pub mod quantify;
pub mod sequence;

pub use logic::{and, not, or, xor};
pub use matcher::{always, Matcher};
pub use predicates::{class, insn, member, method, ty};
pub use quantify::{
    all_dmethods, all_ifields, all_sfields, all_vmethods, any_annos, any_dmethods, any_ifields,
    any_sfields, any_vmethods, at_least_n_dmethods, at_least_n_ifields, at_least_n_sfields,
    at_least_n_vmethods, at_most_n_dmethods, at_most_n_ifields, at_most_n_sfields,
    at_most_n_vmethods, exactly_n_dmethods, exactly_n_ifields, exactly_n_sfields,
    exactly_n_vmethods,
};
pub use sequence::Pattern;

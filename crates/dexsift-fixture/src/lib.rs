/*! In-memory program elements for exercising dexsift queries.
 *
 * Hand-wiring element graphs is tedious: types, owners, supertype chains,
 * and instruction operands all have to agree. [`DexBuilder`] and the fluent
 * class/method/field builders handle the bookkeeping, producing cheap
 * `Arc`-backed handles that implement every model contract. Intended for
 * tests and examples; the production element store lives elsewhere in the
 * toolchain.
 */

pub mod builder;
pub mod model;

pub use builder::{BuildError, ClassBuilder, DexBuilder, FieldBuilder, MethodBuilder};
pub use model::{Anno, Class, Field, Insn, Method, Ty};

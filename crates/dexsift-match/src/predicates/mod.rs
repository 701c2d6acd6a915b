/*! Named domain predicates, grouped by subject kind.
 *
 * Everything here is a thin factory over the model contracts; the returned
 * matchers carry no logic beyond the documented test. Projections that
 * extract an operand (`insn::opcode_method`, `insn::opcode_type`) are fatal
 * when applied to an instruction that cannot carry the operand; guard them
 * with a family matcher via `and`.
 */

pub mod class;
pub mod insn;
pub mod member;
pub mod method;
pub mod ty;

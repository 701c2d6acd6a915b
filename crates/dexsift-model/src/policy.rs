/*! Policy verdicts computed outside the query layer.
 *
 * Keep rules, deletion and rename eligibility, and seed marking are decided
 * by configuration and reachability analysis elsewhere in the toolchain.
 * Elements surface the verdicts; queries only relay them.
 */

/// Externally computed retention verdicts, keyed by the member itself.
pub trait Retention {
    /// Whether later passes may remove this member.
    fn can_delete(&self) -> bool;

    /// Whether later passes may rename this member.
    fn can_rename(&self) -> bool;

    /// Whether the member is explicitly marked to be kept.
    fn is_kept(&self) -> bool;

    /// Whether the member is a reachability seed.
    fn is_seed(&self) -> bool;
}

/// Membership lookup on an external container.
pub trait MemberLookup<T> {
    fn contains(&self, element: &T) -> bool;
}

impl<T> MemberLookup<T> for std::collections::HashSet<T>
where
    T: Eq + std::hash::Hash,
{
    fn contains(&self, element: &T) -> bool {
        std::collections::HashSet::contains(self, element)
    }
}

impl<T> MemberLookup<T> for std::collections::BTreeSet<T>
where
    T: Ord,
{
    fn contains(&self, element: &T) -> bool {
        std::collections::BTreeSet::contains(self, element)
    }
}

//! Diffing the working roster against the last-synchronized baseline.
//!
//! The baseline is keyed by member id, so the diff stays correct even if
//! the endpoint reorders the roster or its membership changes between
//! loads. A member with no baseline entry counts as changed.

use std::collections::HashMap;

use super::models::Member;

/// Snapshot of the roster at the last successful load or save.
pub type Baseline = HashMap<String, Member>;

/// Build a baseline snapshot from the current working list.
pub fn snapshot(members: &[Member]) -> Baseline {
    members
        .iter()
        .map(|member| (member.id.clone(), member.clone()))
        .collect()
}

/// Collect the members whose synchronized fields differ from the baseline,
/// in working-list order.
pub fn changed<'a>(members: &'a [Member], baseline: &Baseline) -> Vec<&'a Member> {
    members
        .iter()
        .filter(|member| match baseline.get(&member.id) {
            Some(original) => {
                let differs = member.differs_from(original);
                if differs {
                    log::debug!(
                        "Member {} changed: {:?}/{:?} -> {:?}/{:?}",
                        member.id,
                        original.status,
                        original.start_date,
                        member.status,
                        member.start_date
                    );
                }
                differs
            }
            None => {
                log::debug!("Member {} has no baseline entry, treating as changed", member.id);
                true
            }
        })
        .collect()
}

/// True when at least one member differs from its baseline entry.
pub fn is_dirty(members: &[Member], baseline: &Baseline) -> bool {
    members.iter().any(|member| {
        baseline
            .get(&member.id)
            .map_or(true, |original| member.differs_from(original))
    })
}

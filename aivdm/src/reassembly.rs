//! Reassembly of payloads split over several sentences.
//!
//! Fragments are collected per group key into a slot array sized by the
//! declared total. A group completes when every slot is filled, whatever the
//! arrival order. Groups that never complete are evicted once enough newer
//! groups have been started, which bounds memory on lossy feeds.

use std::borrow::Cow;
use std::collections::HashMap;

use tracing::debug;

use crate::error::{ErrorKind, ErrorReport, Reported};

/// Groups older than this many newer groups are evicted by default.
pub const DEFAULT_MAX_PENDING_GROUP_AGE: usize = 8;

/// Largest group accepted by default. Sentence fragment counts are one digit.
pub const DEFAULT_MAX_FRAGMENTS: u32 = 9;

/// Identifies the group a fragment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// Group id from a tag block grouping field.
    TagBlock(u32),
    /// Sequential message id and channel from the sentence itself.
    Sentence {
        sequence: Option<u8>,
        channel: Option<char>,
    },
}

/// Where a fragment sits in its group. `index` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentInfo {
    pub key: GroupKey,
    pub index: u32,
    pub total: u32,
}

/// A complete payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembled<'a, T> {
    /// Borrowed for single fragments, owned when concatenated.
    pub payload: Cow<'a, [u8]>,
    /// Padding of the last fragment.
    pub padding: u8,
    /// Context offered with the first fragment.
    pub context: T,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reassembly<'a, T> {
    /// Stored; more fragments are needed.
    Pending,
    Complete(Assembled<'a, T>),
    /// Not stored; see the reported errors.
    Rejected,
}

struct Fragment<T> {
    payload: Vec<u8>,
    padding: u8,
    context: T,
}

struct SentenceGroup<T> {
    slots: Vec<Option<Fragment<T>>>,
    started_at: u64,
}

impl<T> SentenceGroup<T> {
    fn new(total: u32, started_at: u64) -> Self {
        Self {
            slots: Self::empty_slots(total),
            started_at,
        }
    }

    fn empty_slots(total: u32) -> Vec<Option<Fragment<T>>> {
        (0..total).map(|_| None).collect()
    }

    fn received(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    fn received_payload(&self) -> String {
        self.slots
            .iter()
            .flatten()
            .map(|fragment| String::from_utf8_lossy(&fragment.payload))
            .collect()
    }

    fn assemble<'a>(self) -> Option<Assembled<'a, T>> {
        let fragments = self.slots.into_iter().collect::<Option<Vec<_>>>()?;
        let padding = fragments.last()?.padding;

        let mut payload = Vec::with_capacity(fragments.iter().map(|f| f.payload.len()).sum());
        let mut context = None;
        for fragment in fragments {
            payload.extend_from_slice(&fragment.payload);
            context.get_or_insert(fragment.context);
        }

        Some(Assembled {
            payload: Cow::Owned(payload),
            padding,
            context: context?,
        })
    }
}

/// Multi-sentence reassembly state for one input stream.
///
/// `T` is carried per fragment and handed back with the completed payload,
/// taken from fragment 1. The stream reader uses it for tag blocks.
pub struct SentenceReassembler<T> {
    groups: HashMap<GroupKey, SentenceGroup<T>>,
    groups_started: u64,
    max_pending_group_age: usize,
    max_fragments: u32,
}

impl<T> SentenceReassembler<T> {
    pub fn new(max_pending_group_age: usize, max_fragments: u32) -> Self {
        Self {
            groups: HashMap::new(),
            groups_started: 0,
            max_pending_group_age,
            max_fragments,
        }
    }

    /// Adds one fragment.
    ///
    /// Single-fragment messages pass straight through without copying.
    /// Anything else is copied into the group's slot; the completed payload
    /// is returned once the last missing slot is filled.
    pub fn offer<'a>(
        &mut self,
        info: FragmentInfo,
        payload: &'a [u8],
        padding: u8,
        context: T,
    ) -> Reported<Reassembly<'a, T>> {
        let mut errors = ErrorReport::new();

        if info.total == 0 || info.index == 0 || info.index > info.total {
            errors.report(
                ErrorKind::GroupIndexOutOfRange,
                format!(
                    "Fragment {} of {} lies outside its group",
                    info.index, info.total
                ),
                String::from_utf8_lossy(payload),
            );
            return Reported::new(Reassembly::Rejected, errors);
        }

        if info.total > self.max_fragments {
            errors.report(
                ErrorKind::GroupIndexOutOfRange,
                format!(
                    "Fragment {} of {} belongs to a group larger than {} fragments",
                    info.index, info.total, self.max_fragments
                ),
                String::from_utf8_lossy(payload),
            );
            return Reported::new(Reassembly::Rejected, errors);
        }

        if info.total == 1 {
            return Reported::new(
                Reassembly::Complete(Assembled {
                    payload: Cow::Borrowed(payload),
                    padding,
                    context,
                }),
                errors,
            );
        }

        if !self.groups.contains_key(&info.key) {
            self.groups_started += 1;
            self.evict_stale(&mut errors);
            self.groups
                .insert(info.key, SentenceGroup::new(info.total, self.groups_started));
        }

        let Some(group) = self.groups.get_mut(&info.key) else {
            return Reported::new(Reassembly::Rejected, errors);
        };

        if group.slots.len() != info.total as usize {
            errors.report(
                ErrorKind::GroupTotalMismatch,
                format!(
                    "Fragment declares {} fragments but its group was started with {}; restarting the group",
                    info.total,
                    group.slots.len()
                ),
                String::from_utf8_lossy(payload),
            );
            group.slots = SentenceGroup::empty_slots(info.total);
        }

        group.slots[info.index as usize - 1] = Some(Fragment {
            payload: payload.to_vec(),
            padding,
            context,
        });

        if !group.is_complete() {
            return Reported::new(Reassembly::Pending, errors);
        }

        let assembled = self
            .groups
            .remove(&info.key)
            .and_then(SentenceGroup::assemble);
        match assembled {
            Some(assembled) => Reported::new(Reassembly::Complete(assembled), errors),
            None => Reported::new(Reassembly::Pending, errors),
        }
    }

    fn evict_stale(&mut self, errors: &mut ErrorReport) {
        let now = self.groups_started;
        let max_age = self.max_pending_group_age as u64;
        self.groups.retain(|key, group| {
            if now - group.started_at <= max_age {
                return true;
            }
            debug!(
                "Evicting incomplete group {:?} with {} of {} fragments",
                key,
                group.received(),
                group.slots.len()
            );
            errors.report(
                ErrorKind::IncompleteGroupEvicted,
                format!(
                    "Group {:?} was dropped with {} of {} fragments received",
                    key,
                    group.received(),
                    group.slots.len()
                ),
                group.received_payload(),
            );
            false
        });
    }

    /// Drops every pending group.
    pub fn reset(&mut self) {
        self.groups.clear();
    }

    /// Number of groups waiting for fragments.
    pub fn pending_groups(&self) -> usize {
        self.groups.len()
    }
}

impl<T> Default for SentenceReassembler<T> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PENDING_GROUP_AGE, DEFAULT_MAX_FRAGMENTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(group: u32, index: u32, total: u32) -> FragmentInfo {
        FragmentInfo {
            key: GroupKey::TagBlock(group),
            index,
            total,
        }
    }

    fn complete<T>(result: Reported<Reassembly<'_, T>>) -> Assembled<'_, T> {
        match result.value {
            Reassembly::Complete(assembled) => assembled,
            _ => panic!("group did not complete"),
        }
    }

    #[test]
    fn test_single_fragment_is_borrowed() {
        let mut reassembler = SentenceReassembler::default();
        let payload = b"177KQJ5000G?tO`K>RA1wUbN0TKH";

        let result = reassembler.offer(fragment(1, 1, 1), payload, 0, ());
        assert!(result.errors.is_empty());
        let assembled = complete(result);
        assert!(matches!(assembled.payload, Cow::Borrowed(_)));
        assert_eq!(&*assembled.payload, payload);
        assert_eq!(reassembler.pending_groups(), 0);
    }

    #[test]
    fn test_in_order_fragments() {
        let mut reassembler = SentenceReassembler::default();

        let first = reassembler.offer(fragment(7764, 1, 2), b"55?Mb", 0, "first");
        assert_eq!(first.value, Reassembly::Pending);
        assert_eq!(reassembler.pending_groups(), 1);

        let assembled = complete(reassembler.offer(fragment(7764, 2, 2), b"888", 2, "second"));
        assert_eq!(&*assembled.payload, b"55?Mb888");
        assert_eq!(assembled.padding, 2);
        assert_eq!(assembled.context, "first");
        assert_eq!(reassembler.pending_groups(), 0);
    }

    #[test]
    fn test_out_of_order_fragments() {
        let mut reassembler = SentenceReassembler::default();

        let second = reassembler.offer(fragment(9628, 2, 2), b"888", 2, "second");
        assert_eq!(second.value, Reassembly::Pending);

        let assembled = complete(reassembler.offer(fragment(9628, 1, 2), b"55?Mb", 0, "first"));
        assert_eq!(&*assembled.payload, b"55?Mb888");
        assert_eq!(assembled.padding, 2);
        assert_eq!(assembled.context, "first");
    }

    #[test]
    fn test_three_fragments_any_order() {
        let mut reassembler = SentenceReassembler::default();
        assert_eq!(reassembler.offer(fragment(3, 3, 3), b"C", 4, ()).value, Reassembly::Pending);
        assert_eq!(reassembler.offer(fragment(3, 1, 3), b"A", 0, ()).value, Reassembly::Pending);
        let assembled = complete(reassembler.offer(fragment(3, 2, 3), b"B", 0, ()));
        assert_eq!(&*assembled.payload, b"ABC");
        assert_eq!(assembled.padding, 4);
    }

    #[test]
    fn test_groups_are_independent() {
        let mut reassembler = SentenceReassembler::default();
        reassembler.offer(fragment(1, 1, 2), b"A1", 0, ());
        reassembler.offer(fragment(2, 1, 2), b"B1", 0, ());

        let sentence_key = FragmentInfo {
            key: GroupKey::Sentence {
                sequence: Some(1),
                channel: Some('A'),
            },
            index: 1,
            total: 2,
        };
        reassembler.offer(sentence_key, b"S1", 0, ());
        assert_eq!(reassembler.pending_groups(), 3);

        let assembled = complete(reassembler.offer(fragment(2, 2, 2), b"B2", 0, ()));
        assert_eq!(&*assembled.payload, b"B1B2");
        let assembled = complete(reassembler.offer(
            FragmentInfo { index: 2, ..sentence_key },
            b"S2",
            0,
            (),
        ));
        assert_eq!(&*assembled.payload, b"S1S2");
        assert_eq!(reassembler.pending_groups(), 1);
    }

    #[test]
    fn test_duplicate_fragment_overwrites() {
        let mut reassembler = SentenceReassembler::default();
        reassembler.offer(fragment(5, 1, 2), b"OLD", 0, ());
        reassembler.offer(fragment(5, 1, 2), b"NEW", 0, ());
        let assembled = complete(reassembler.offer(fragment(5, 2, 2), b"2", 0, ()));
        assert_eq!(&*assembled.payload, b"NEW2");
    }

    #[test]
    fn test_index_out_of_range() {
        let mut reassembler = SentenceReassembler::default();
        for (index, total) in [(0, 2), (3, 2), (1, 0)] {
            let result = reassembler.offer(fragment(1, index, total), b"X", 0, ());
            assert_eq!(result.value, Reassembly::Rejected);
            assert!(result.errors.contains(ErrorKind::GroupIndexOutOfRange));
        }
        assert_eq!(reassembler.pending_groups(), 0);
    }

    #[test]
    fn test_oversized_group_is_rejected() {
        let mut reassembler = SentenceReassembler::default();
        for (index, total) in [(1, 10), (1, 999_999_999), (5, u32::MAX)] {
            let result = reassembler.offer(fragment(1, index, total), b"55?Mb", 0, ());
            assert_eq!(result.value, Reassembly::Rejected);
            assert!(result.errors.contains(ErrorKind::GroupIndexOutOfRange));
        }
        assert_eq!(reassembler.pending_groups(), 0);

        // The limit itself is still accepted.
        let result = reassembler.offer(fragment(1, 1, 9), b"55?Mb", 0, ());
        assert_eq!(result.value, Reassembly::Pending);
    }

    #[test]
    fn test_max_fragments_is_configurable() {
        let mut reassembler = SentenceReassembler::new(DEFAULT_MAX_PENDING_GROUP_AGE, 2);
        let result = reassembler.offer(fragment(1, 1, 3), b"A", 0, ());
        assert_eq!(result.value, Reassembly::Rejected);

        reassembler.offer(fragment(2, 1, 2), b"A", 0, ());
        let assembled = complete(reassembler.offer(fragment(2, 2, 2), b"B", 0, ()));
        assert_eq!(&*assembled.payload, b"AB");
    }

    #[test]
    fn test_total_mismatch_restarts_group() {
        let mut reassembler = SentenceReassembler::default();
        reassembler.offer(fragment(9, 1, 2), b"A", 0, ());

        let result = reassembler.offer(fragment(9, 1, 3), b"X", 0, ());
        assert_eq!(result.value, Reassembly::Pending);
        assert!(result.errors.contains(ErrorKind::GroupTotalMismatch));

        reassembler.offer(fragment(9, 2, 3), b"Y", 0, ());
        let assembled = complete(reassembler.offer(fragment(9, 3, 3), b"Z", 0, ()));
        assert_eq!(&*assembled.payload, b"XYZ");
    }

    #[test]
    fn test_abandoned_group_is_evicted() {
        let mut reassembler = SentenceReassembler::new(DEFAULT_MAX_PENDING_GROUP_AGE, DEFAULT_MAX_FRAGMENTS);
        reassembler.offer(fragment(100, 1, 2), b"ABANDONED", 0, ());

        for group in 0..DEFAULT_MAX_PENDING_GROUP_AGE as u32 {
            let result = reassembler.offer(fragment(group, 1, 2), b"X", 0, ());
            assert!(result.errors.is_empty());
        }
        assert_eq!(reassembler.pending_groups(), DEFAULT_MAX_PENDING_GROUP_AGE + 1);

        let result = reassembler.offer(fragment(200, 1, 2), b"X", 0, ());
        assert_eq!(result.errors.len(), 1);
        let error = result.errors.iter().next().unwrap();
        assert_eq!(error.kind, ErrorKind::IncompleteGroupEvicted);
        assert_eq!(error.raw, "ABANDONED");

        // The late fragment starts a fresh group rather than completing.
        let late = reassembler.offer(fragment(100, 2, 2), b"LATE", 0, ());
        assert_eq!(late.value, Reassembly::Pending);
    }

    #[test]
    fn test_fragments_of_existing_groups_do_not_age_others() {
        let mut reassembler = SentenceReassembler::new(1, DEFAULT_MAX_FRAGMENTS);
        reassembler.offer(fragment(1, 1, 3), b"A", 0, ());
        reassembler.offer(fragment(2, 1, 2), b"B", 0, ());
        // Completing group 2 starts no new group.
        complete(reassembler.offer(fragment(2, 2, 2), b"B", 0, ()));
        reassembler.offer(fragment(1, 2, 3), b"A", 0, ());
        let assembled = complete(reassembler.offer(fragment(1, 3, 3), b"A", 0, ()));
        assert_eq!(&*assembled.payload, b"AAA");
    }

    #[test]
    fn test_reset_drops_pending_groups() {
        let mut reassembler = SentenceReassembler::default();
        reassembler.offer(fragment(1, 1, 2), b"A", 0, ());
        reassembler.reset();
        assert_eq!(reassembler.pending_groups(), 0);
        assert_eq!(
            reassembler.offer(fragment(1, 2, 2), b"B", 0, ()).value,
            Reassembly::Pending
        );
    }
}

//! Section derivation and per-label bucketing.

use std::collections::{BTreeMap, HashSet};

use crate::models::{Day, Label, ScheduleEntry, Section, SectionBuckets, SectionSchedule};

/// Distinct (section, label) pairs across all days, in first-seen order.
///
/// Entries without a parsable section are skipped.
pub fn derive_sections<'a, I>(days: I) -> Vec<Section>
where
    I: IntoIterator<Item = &'a Vec<ScheduleEntry>>,
{
    let mut seen = HashSet::new();
    days.into_iter()
        .flatten()
        .filter(|entry| !entry.section.is_empty())
        .map(|entry| Section {
            section: entry.section.clone(),
            label: entry.label.clone(),
        })
        .filter(|section| seen.insert(section.clone()))
        .collect()
}

/// Entries of `section` under `label`, split by day.
fn section_schedule(
    label: &str,
    section: &str,
    per_day: &BTreeMap<Day, Vec<ScheduleEntry>>,
) -> SectionSchedule {
    per_day
        .iter()
        .map(|(day, entries)| {
            let matching = entries
                .iter()
                .filter(|entry| entry.label.as_deref() == Some(label) && entry.section == section)
                .cloned()
                .collect();
            (*day, matching)
        })
        .collect()
}

/// Build the section buckets of a single label.
pub fn bucket_label(
    label: &Label,
    sections: &[Section],
    per_day: &BTreeMap<Day, Vec<ScheduleEntry>>,
) -> SectionBuckets {
    sections
        .iter()
        .filter(|section| section.label.as_deref() == Some(label.name.as_str()))
        .map(|section| {
            (
                section.section.clone(),
                section_schedule(&label.name, &section.section, per_day),
            )
        })
        .collect()
}

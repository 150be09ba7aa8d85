#![no_main]
use handoff_libs::member::Roster;
use handoff_libs::overlap::{recommend, OverlapGrid, MAX_RECOMMENDATIONS};
use libfuzzer_sys::fuzz_target;
use std::collections::BTreeSet;

fuzz_target!(|data: (Roster, u8)| {
    let (roster, mask) = data;

    let selected: BTreeSet<String> = roster
        .members()
        .iter()
        .enumerate()
        .filter(|(n, _)| mask & (1u8 << (n % 8)) != 0)
        .map(|(_, member)| member.id.clone())
        .collect();

    let grid = OverlapGrid::compute(&roster, &selected);

    if selected.is_empty() {
        assert!(grid.is_empty(), "empty selection must yield an empty grid");
    } else {
        assert_eq!(grid.days.len(), 5);
    }

    for day in &grid.days {
        assert_eq!(day.slots.len(), 24);
        for slot in &day.slots {
            assert!(
                slot.attendees.iter().all(|id| selected.contains(id)),
                "grid cell holds an unselected id"
            );
            assert!(slot.attendees.len() <= selected.len());
        }
    }

    let recommended = recommend(&grid, &roster, &selected);
    assert!(recommended.len() <= MAX_RECOMMENDATIONS);
    assert!(
        recommended.windows(2).all(|pair| pair[0].score >= pair[1].score),
        "recommendations out of score order"
    );

    // every recommendation points at a full-overlap cell
    for slot in &recommended {
        let cell = grid
            .days
            .iter()
            .find(|day| day.day == slot.day)
            .and_then(|day| day.slots.iter().find(|s| s.hour == slot.hour))
            .expect("recommended slot missing from grid");
        assert_eq!(cell.attendees.len(), selected.len());
    }

    // recomputation is deterministic
    assert_eq!(recommended, recommend(&grid, &roster, &selected));
});

#![no_main]
use handoff_libs::time::{local_minutes, UtcOffset};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, i16)| {
    let (hour, offset_minutes) = data;
    let hour = hour % 24;
    let offset = UtcOffset::from_minutes(offset_minutes);

    let local = local_minutes(hour, offset);
    assert!(
        local < 24 * 60,
        "hour {} at offset {} left the day: {}",
        hour,
        offset_minutes,
        local
    );

    // same inputs, same local time
    assert_eq!(local, local_minutes(hour, offset));
});

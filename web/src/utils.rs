use memorama_core::Symbol;

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// `mm:ss` as shown next to the move counter.
pub(crate) fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// `Mm Ss` as shown in the win message.
pub(crate) fn format_duration(seconds: u32) -> String {
    format!("{}m {}s", seconds / 60, seconds % 60)
}

/// Remembers an image that failed to load, returns whether it was new.
pub(crate) fn record_failed_asset(failed: &mut Vec<Symbol>, symbol: Symbol) -> bool {
    if failed.contains(&symbol) {
        return false;
    }
    failed.push(symbol);
    true
}

pub(crate) fn failed_assets_notice(failed: &[Symbol]) -> Option<String> {
    match failed.len() {
        0 => None,
        1 => Some("1 image failed to load".to_string()),
        count => Some(format!("{} images failed to load", count)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_assets_are_recorded_once() {
        let mut failed = Vec::new();

        assert!(record_failed_asset(&mut failed, Symbol::from("images/go.png")));
        assert!(!record_failed_asset(&mut failed, Symbol::from("images/go.png")));
        assert!(record_failed_asset(&mut failed, Symbol::from("images/r.png")));

        assert_eq!(
            failed,
            [Symbol::from("images/go.png"), Symbol::from("images/r.png")]
        );
    }

    #[test]
    fn notice_counts_distinct_failures() {
        let mut failed: Vec<Symbol> = Vec::new();
        assert_eq!(failed_assets_notice(&failed), None);

        record_failed_asset(&mut failed, Symbol::from("images/go.png"));
        record_failed_asset(&mut failed, Symbol::from("images/go.png"));
        assert_eq!(
            failed_assets_notice(&failed).as_deref(),
            Some("1 image failed to load")
        );

        record_failed_asset(&mut failed, Symbol::from("images/r.png"));
        assert_eq!(
            failed_assets_notice(&failed).as_deref(),
            Some("2 images failed to load")
        );
    }

    #[test]
    fn clock_pads_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(75), "01:15");
        assert_eq!(format_clock(6000), "100:00");
    }

    #[test]
    fn duration_is_unpadded() {
        assert_eq!(format_duration(9), "0m 9s");
        assert_eq!(format_duration(125), "2m 5s");
    }
}

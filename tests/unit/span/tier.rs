use super::*;

#[test]
fn tier_widths_double() {
    let bytes: Vec<usize> = SpanTier::ALL.iter().map(|t| t.bytes()).collect();
    assert_eq!(bytes, vec![8, 16, 32, 64, 128]);
}

#[test]
fn for_len_picks_largest_tier_that_fits() {
    let cap = SpanTier::B1024;
    assert_eq!(SpanTier::for_len_capped(0, cap), None);
    assert_eq!(SpanTier::for_len_capped(7, cap), None);
    assert_eq!(SpanTier::for_len_capped(8, cap), Some(SpanTier::B64));
    assert_eq!(SpanTier::for_len_capped(31, cap), Some(SpanTier::B128));
    assert_eq!(SpanTier::for_len_capped(32, cap), Some(SpanTier::B256));
    assert_eq!(SpanTier::for_len_capped(127, cap), Some(SpanTier::B512));
    assert_eq!(SpanTier::for_len_capped(4096, cap), Some(SpanTier::B1024));
}

#[test]
fn for_len_respects_cap() {
    assert_eq!(
        SpanTier::for_len_capped(4096, SpanTier::B256),
        Some(SpanTier::B256)
    );
    assert!(SpanTier::for_len(1 << 20).unwrap() <= SpanTier::native_max());
    assert!(SpanTier::native_max() >= SpanTier::B128);
}

/// Reduce finding counts to a 0-100 quality score.
///
/// Base 100, minus 15 per issue. A prompt that produced no suggestions at
/// all earns a flat 10-point bonus; suggestions themselves never deduct.
/// The bonus is applied before the clamp, so a perfectly clean prompt is
/// 110 clamped to 100.
pub fn score(issue_count: usize, suggestion_count: usize) -> u8 {
    let mut total = 100i64 - 15 * issue_count as i64;
    if suggestion_count == 0 {
        total += 10;
    }
    total.clamp(0, 100) as u8
}

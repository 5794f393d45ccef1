/// Renders a raw token amount as an exact decimal string, e.g. `100_000_000_000`
/// with 9 decimals becomes `"100.000000000"`.
pub fn format_ui_amount(amount: u64, decimals: u8) -> String {
    let decimals = decimals as usize;
    if decimals == 0 {
        return amount.to_string();
    }

    let digits = format!("{:0>width$}", amount, width = decimals + 1);
    let (whole, fraction) = digits.split_at(digits.len() - decimals);
    format!("{}.{}", whole, fraction)
}

use lazy_static::lazy_static;
use regex::Regex;

// Shorten an EVM address to its first and last four hex digits: 0x1234…abcd
pub fn truncate_eth_address(address: &str) -> String {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^(0x[a-zA-Z0-9]{4})[a-zA-Z0-9]+([a-zA-Z0-9]{4})$").unwrap();
    }

    match RE.captures(address) {
        Some(cap) => format!("{}…{}", &cap[1], &cap[2]),
        None => address.to_string(),
    }
}

// Shorten a transaction hash for table display
pub fn shorten_transaction_id(transaction_id: &str) -> String {
    let chars: Vec<char> = transaction_id.chars().collect();
    if chars.len() <= 20 {
        return transaction_id.to_string();
    }

    let start: String = chars[..10].iter().collect();
    let end: String = chars[chars.len() - 10..].iter().collect();

    format!("{}...{}", start, end)
}

// Clamp a percentage into 0..=100
pub fn clamp_percent(value: u8) -> u8 {
    value.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_addresses() {
        assert_eq!(
            truncate_eth_address("0x55d398326f99059ff775485246999027b3197955"),
            "0x55d3…7955"
        );
        assert_eq!(truncate_eth_address("player-one"), "player-one");
        assert_eq!(truncate_eth_address("0x1234"), "0x1234");
    }

    #[test]
    fn shortens_transaction_ids() {
        let id = format!("0x{}", "ab".repeat(32));
        let short = shorten_transaction_id(&id);
        assert_eq!(short, "0xabababab...ababababab");
        assert_eq!(shorten_transaction_id("0x1234"), "0x1234");
    }
}

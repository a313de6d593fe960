//! Input validation and the private-range policy.

use super::types::LookupError;
use std::net::IpAddr;

/// Parse one line of user input into an address.
///
/// Surrounding whitespace (including the trailing newline from the
/// prompt) is ignored. Empty input is invalid.
pub fn parse_address(input: &str) -> Result<IpAddr, LookupError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LookupError::InvalidAddress(String::new()));
    }
    trimmed
        .parse()
        .map_err(|_| LookupError::InvalidAddress(trimmed.to_string()))
}

/// Private-address policy.
///
/// Deliberately narrow: only the three IPv4 blocks 10.0.0.0/8,
/// 172.16.0.0/12 and 192.168.0.0/16 count as private. IPv6 is never
/// private here, and loopback, link-local and CGNAT space are treated as
/// public. Widening this changes which addresses get sent to the
/// geolocation providers.
pub fn is_private(address: IpAddr) -> bool {
    match address {
        IpAddr::V4(v4) => {
            let [a, b, _, _] = v4.octets();
            a == 10 || (a == 172 && (16..=31).contains(&b)) || (a == 192 && b == 168)
        }
        IpAddr::V6(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_parse_v4_and_v6() {
        assert_eq!(parse_address("8.8.8.8").unwrap(), IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)));
        assert!(parse_address("2001:4860:4860::8888").unwrap().is_ipv6());
    }

    #[test]
    fn test_parse_trims_newline() {
        assert_eq!(parse_address("  1.1.1.1\n").unwrap().to_string(), "1.1.1.1");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "   ", "\n", "not-an-ip", "999.999.1.1", "1.2.3", "8.8.8.8/24"] {
            assert!(
                matches!(parse_address(bad), Err(LookupError::InvalidAddress(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_private_ten_block() {
        assert!(is_private("10.0.0.1".parse().unwrap()));
        assert!(is_private("10.255.255.255".parse().unwrap()));
    }

    #[test]
    fn test_private_172_edges() {
        assert!(!is_private("172.15.255.255".parse().unwrap()));
        assert!(is_private("172.16.0.0".parse().unwrap()));
        assert!(is_private("172.31.255.255".parse().unwrap()));
        assert!(!is_private("172.32.0.0".parse().unwrap()));
    }

    #[test]
    fn test_private_192_168() {
        assert!(is_private("192.168.1.1".parse().unwrap()));
        assert!(!is_private("192.169.1.1".parse().unwrap()));
        assert!(!is_private("193.168.1.1".parse().unwrap()));
    }

    #[test]
    fn test_policy_stays_narrow() {
        // Loopback, link-local, CGNAT: public under this policy.
        for addr in ["127.0.0.1", "169.254.1.1", "100.64.0.1", "8.8.8.8"] {
            assert!(!is_private(addr.parse().unwrap()), "{}", addr);
        }
        // IPv6 is never private, even ULA or a mapped 10.x address.
        for addr in ["fd00::1", "fe80::1", "::ffff:10.0.0.1", "a00::1"] {
            assert!(!is_private(addr.parse().unwrap()), "{}", addr);
        }
    }

    #[test]
    fn test_policy_exhaustive_second_octet() {
        for b in 0..=255u8 {
            let addr = IpAddr::V4(Ipv4Addr::new(172, b, 0, 1));
            assert_eq!(is_private(addr), (16..=31).contains(&b));
        }
    }
}

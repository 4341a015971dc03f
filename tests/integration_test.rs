//! Integration tests for ipcalc
//!
//! These tests check the subnet calculation through the public API only.

use ipcalc::models::{cut_addr, get_cidr_mask, parse_addr, render_addr, PrefixLength};
use ipcalc::{compute_subnet, CalcError};

const SAMPLE_ADDRESSES: [&str; 6] = [
    "0.0.0.0",
    "10.11.12.13",
    "172.16.254.1",
    "192.168.0.100",
    "203.0.113.255",
    "255.255.255.255",
];

#[test]
fn test_hosts_total_for_every_prefix() {
    for len in 0..=32i64 {
        let info = compute_subnet("192.168.0.100", len).expect("valid input");
        assert_eq!(info.hosts_total, 1u64 << (32 - len), "prefix /{len}");
        assert_eq!(info.prefix_length as i64, len);
    }
    assert_eq!(compute_subnet("0.0.0.0", 0).unwrap().hosts_total, 4294967296);
}

#[test]
fn test_hosts_available_by_class() {
    for len in 0..=30i64 {
        let info = compute_subnet("10.11.12.13", len).unwrap();
        assert_eq!(info.hosts_available, info.hosts_total - 2, "prefix /{len}");
        assert!(info.broadcast.is_some(), "prefix /{len} has a broadcast");
    }
    assert_eq!(compute_subnet("10.11.12.13", 31).unwrap().hosts_available, 2);
    assert_eq!(compute_subnet("10.11.12.13", 32).unwrap().hosts_available, 1);
}

#[test]
fn test_network_is_stable_under_masking() {
    for addr in SAMPLE_ADDRESSES {
        for len in 0..=32i64 {
            let info = compute_subnet(addr, len).unwrap();
            let prefix = PrefixLength::new(len).unwrap();
            let network = parse_addr(&info.network_address).unwrap();
            assert_eq!(cut_addr(network, prefix), network, "{addr}/{len}");
            assert_eq!(render_addr(get_cidr_mask(prefix)), info.netmask);
            assert_eq!(info.network_cidr, format!("{}/{len}", info.network_address));
        }
    }
}

#[test]
fn test_boundaries_are_ordered() {
    for addr in SAMPLE_ADDRESSES {
        for len in 0..=32i64 {
            let info = compute_subnet(addr, len).unwrap();
            let prefix = PrefixLength::new(len).unwrap();
            let network = parse_addr(&info.network_address).unwrap();
            let host_min = parse_addr(&info.host_min).unwrap();
            let host_max = parse_addr(&info.host_max).unwrap();
            match len {
                32 => {
                    assert_eq!(info.host_min, addr);
                    assert_eq!(info.host_max, addr);
                    assert_eq!(network, host_min);
                    assert_eq!(info.broadcast, None);
                }
                31 => {
                    assert_eq!(host_min, network);
                    assert_eq!(host_max, network + 1);
                    assert_eq!(info.broadcast, None);
                }
                _ => {
                    let broadcast = parse_addr(info.broadcast.as_deref().unwrap()).unwrap();
                    assert!(network < host_min, "{addr}/{len}");
                    assert!(host_min <= host_max, "{addr}/{len}");
                    assert!(host_max < broadcast, "{addr}/{len}");
                    // Counting up from the network must land on all host bits set.
                    assert_eq!(broadcast, network | !get_cidr_mask(prefix), "{addr}/{len}");
                    assert_eq!(
                        u64::from(broadcast - network) + 1,
                        info.hosts_total,
                        "{addr}/{len}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_address_round_trip() {
    for addr in SAMPLE_ADDRESSES {
        assert_eq!(render_addr(parse_addr(addr).unwrap()), addr);
        assert_eq!(compute_subnet(addr, 24).unwrap().address, addr);
    }
}

#[test]
fn test_scenario_24() {
    let info = compute_subnet("192.168.0.100", 24).unwrap();
    assert_eq!(info.netmask, "255.255.255.0");
    assert_eq!(info.network_address, "192.168.0.0");
    assert_eq!(info.host_min, "192.168.0.1");
    assert_eq!(info.host_max, "192.168.0.254");
    assert_eq!(info.broadcast.as_deref(), Some("192.168.0.255"));
    assert_eq!(info.hosts_total, 256);
    assert_eq!(info.hosts_available, 254);
}

#[test]
fn test_scenario_31_and_32() {
    let info = compute_subnet("192.168.0.100", 31).unwrap();
    assert_eq!(info.netmask, "255.255.255.254");
    assert_eq!(info.network_address, "192.168.0.100");
    assert_eq!(info.host_min, "192.168.0.100");
    assert_eq!(info.host_max, "192.168.0.101");
    assert_eq!(info.broadcast, None);
    assert_eq!((info.hosts_total, info.hosts_available), (2, 2));

    let info = compute_subnet("192.168.0.100", 32).unwrap();
    assert_eq!(info.host_min, "192.168.0.100");
    assert_eq!(info.host_max, "192.168.0.100");
    assert_eq!(info.broadcast, None);
    assert_eq!((info.hosts_total, info.hosts_available), (1, 1));
}

#[test]
fn test_scenario_whole_address_space() {
    let info = compute_subnet("0.0.0.0", 0).unwrap();
    assert_eq!(info.hosts_total, 4294967296);
    assert_eq!(info.hosts_available, 4294967294);
    assert_eq!(info.network_address, "0.0.0.0");
    assert_eq!(info.broadcast.as_deref(), Some("255.255.255.255"));
}

#[test]
fn test_scenario_failures() {
    assert!(matches!(
        compute_subnet("192.168.0.100", 44),
        Err(CalcError::InvalidPrefix(_))
    ));
    assert!(matches!(
        compute_subnet("192.168.0.1000", 32),
        Err(CalcError::InvalidAddress(_))
    ));
    assert!(compute_subnet("192.168.0.1000", 44).is_err());
}

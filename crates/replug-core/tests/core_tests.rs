use std::path::{Path, PathBuf};

use replug_core::{AddonEntry, AddonIdentity, Catalog, LiveError, RecoveryLedger, StageConfig};

#[test]
fn test_catalog_to_ledger_flow() {
    let mut catalog = Catalog::new();
    catalog.insert(AddonEntry::new("/dev/plugins/foo")).unwrap();
    catalog.insert(AddonEntry::new("/dev/plugins/bar.py")).unwrap();

    let ledger = RecoveryLedger::from_locations(catalog.locations());
    let encoded = ledger.encode();
    assert_eq!(encoded, "/dev/plugins/foo|/dev/plugins/bar.py");

    // A later process recovers the same locations.
    let decoded = RecoveryLedger::decode(&encoded);
    assert_eq!(decoded.locations(), catalog.locations().as_slice());
}

#[test]
fn test_identity_addresses_staged_path() {
    let config = StageConfig::new("/host/scripts/addons");
    let identity = AddonIdentity::from_location(Path::new("/dev/plugins/tool.py"));

    assert_eq!(identity.module, "tool");
    assert_eq!(
        config.staged_path(&identity.staged_name),
        PathBuf::from("/host/scripts/addons/tool.py")
    );
}

#[test]
fn test_duplicate_insert_keeps_catalog_intact() {
    let mut catalog = Catalog::new();
    catalog.insert(AddonEntry::new("/dev/plugins/foo")).unwrap();

    let mut dup = AddonEntry::new("/dev/plugins/foo");
    dup.enabled = false;
    let err = catalog.insert(dup).unwrap_err();

    assert!(matches!(err, LiveError::DuplicateEntry { .. }));
    assert_eq!(catalog.len(), 1);
    assert!(catalog.entry(0).unwrap().enabled);
}

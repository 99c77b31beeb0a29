//! Bootstrapping providers from repository definition files, plus the
//! degraded no-base-directory mode used by integration harnesses.

use assert_fs::prelude::*;
use predicates::prelude::*;
use transport_core::{Repository, RepositoryStore, TransportProvider};
use transport_file::FileProvider;
use transport_test_utils::TransferFixture;

fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_provider_bootstrapped_from_toml_definition() {
    init_test_tracing();

    let fixture = TransferFixture::new();
    let temp = assert_fs::TempDir::new().unwrap();
    let definition = temp.child("releases.toml");
    definition
        .write_str(&format!(
            "base_dir = \"{}\"\nid = \"releases\"\n",
            fixture.base_dir().replace('\\', "/")
        ))
        .unwrap();

    let repository = RepositoryStore::new().load(definition.path()).unwrap();
    assert_eq!(repository.id.as_deref(), Some("releases"));

    let provider = FileProvider::new(repository);
    provider.open_connection().unwrap();

    fixture.write_file("a.txt", "contents");
    assert!(provider.resource_exists("a.txt").unwrap());
}

#[test]
fn test_definition_survives_store_round_trip() {
    let temp = assert_fs::TempDir::new().unwrap();
    let store = RepositoryStore::new();
    let repository = Repository::new("/var/artifacts").with_id("snapshots");

    for name in ["repo.toml", "repo.json", "repo.yaml"] {
        let path = temp.path().join(name);
        store.save(&path, &repository).unwrap();
        assert_eq!(store.load(&path).unwrap(), repository);
    }
}

#[test]
fn test_unrooted_provider_connects_without_touching_disk() {
    init_test_tracing();

    let temp = assert_fs::TempDir::new().unwrap();
    let provider = FileProvider::new(Repository::unrooted());

    provider.open_connection().unwrap();
    provider.close_connection().unwrap();

    // Nothing may appear anywhere; spot-check the scratch space stayed empty.
    temp.child("repo").assert(predicate::path::missing());
}

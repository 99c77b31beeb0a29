//! End-to-end provider sessions, driven the way a transfer orchestrator
//! drives them: connect, move artifacts, probe, disconnect.

use std::fs;
use std::io::{Read, Write};

use assert_fs::prelude::*;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use transport_core::{Repository, Resource, TransportProvider};
use transport_file::FileProvider;

#[test]
fn test_full_deploy_and_fetch_session() {
    let temp = assert_fs::TempDir::new().unwrap();
    let base = temp.child("repo");

    let repository = Repository::new(base.path().to_string_lossy()).with_id("releases");
    let provider = FileProvider::new(repository);

    provider.open_connection().unwrap();
    base.assert(predicate::path::is_dir());

    // Deploy one artifact.
    let resource = Resource::new("group/artifact/1.0/artifact-1.0.jar");
    let mut upload = provider.open_write(&resource).unwrap();
    upload.write_all(b"jar payload").unwrap();
    upload.flush().unwrap();
    drop(upload);

    // Probe and list what the deploy produced.
    assert!(
        provider
            .resource_exists("group/artifact/1.0/artifact-1.0.jar")
            .unwrap()
    );
    assert!(provider.resource_exists("group/artifact/1.0/").unwrap());
    assert_eq!(
        provider.file_list("group/artifact").unwrap(),
        vec!["1.0/".to_string()]
    );

    // Fetch it back.
    let mut fetched = Resource::new("group/artifact/1.0/artifact-1.0.jar");
    let mut download = provider.open_read(&mut fetched).unwrap();
    let mut payload = Vec::new();
    download.read_to_end(&mut payload).unwrap();

    assert_eq!(payload, b"jar payload");
    assert_eq!(fetched.content_length(), Some(11));
    assert!(fetched.last_modified_millis().unwrap() > 0);

    provider.close_connection().unwrap();
}

#[test]
fn test_aborted_upload_leaves_no_trace() {
    let temp = assert_fs::TempDir::new().unwrap();
    let provider = FileProvider::new(Repository::new(temp.path().to_string_lossy()));
    provider.open_connection().unwrap();

    let resource = Resource::new("group/aborted.jar");
    let upload = provider.open_write(&resource).unwrap();
    drop(upload);

    temp.child("group/aborted.jar")
        .assert(predicate::path::missing());
    // The parent chain is a permitted side effect of opening the stream.
    temp.child("group").assert(predicate::path::is_dir());
}

#[test]
fn test_site_deploy_via_put_directory() {
    let temp = assert_fs::TempDir::new().unwrap();
    let site = temp.child("generated-site");
    site.child("index.html").write_str("<html></html>").unwrap();
    site.child("css/style.css").write_str("body {}").unwrap();

    let repo_root = temp.child("repo");
    let provider = FileProvider::new(Repository::new(repo_root.path().to_string_lossy()));
    provider.open_connection().unwrap();

    assert!(provider.supports_directory_copy());
    provider.put_directory(site.path(), "site/current").unwrap();

    repo_root
        .child("site/current/index.html")
        .assert(predicate::str::contains("<html>"));
    repo_root
        .child("site/current/css/style.css")
        .assert(predicate::path::is_file());

    // Redeploy over the existing tree, with an unrelated file in place.
    repo_root
        .child("site/current/KEEP.txt")
        .write_str("manual note")
        .unwrap();
    provider.put_directory(site.path(), "site/current").unwrap();
    repo_root
        .child("site/current/KEEP.txt")
        .assert(predicate::str::contains("manual note"));
}

#[test]
fn test_two_providers_on_one_base_last_writer_wins() {
    let temp = assert_fs::TempDir::new().unwrap();
    let base = temp.path().to_string_lossy().into_owned();

    let first = FileProvider::new(Repository::new(base.clone()));
    let second = FileProvider::new(Repository::new(base));
    first.open_connection().unwrap();
    second.open_connection().unwrap();

    let resource = Resource::new("contended.txt");
    let mut upload = first.open_write(&resource).unwrap();
    upload.write_all(b"from first").unwrap();
    drop(upload);

    let mut upload = second.open_write(&resource).unwrap();
    upload.write_all(b"from second").unwrap();
    drop(upload);

    assert_eq!(
        fs::read_to_string(temp.path().join("contended.txt")).unwrap(),
        "from second"
    );
}

//! End-to-end exercises of the file collaborators plus the signature
//! transforms, on real temporary files.

use tailsig::config::Config;
use tailsig::detector::{classify, SignatureStatus};
use tailsig::file_io;
use tailsig::ops::{self, Action};
use tailsig::TailsigError;

#[test]
fn sign_check_unsign_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default();
    let payload = b"quarterly figures, do not edit".to_vec();

    let input = dir.path().join("report.bin");
    file_io::write_file_bytes(&input, &payload).unwrap();

    // Sign into the derived output path.
    let signed_path = file_io::resolve_output_path(&input, None, &config).unwrap();
    assert_eq!(signed_path, dir.path().join("report.signed"));

    let buffer = file_io::read_file_bytes(&input, &config).unwrap();
    let signed = ops::apply(Action::AddSign, &classify(&buffer)).unwrap();
    file_io::write_file_bytes(&signed_path, &signed).unwrap();

    // Check the signed copy.
    let signed_buffer = file_io::read_file_bytes(&signed_path, &config).unwrap();
    assert_eq!(signed_buffer.len(), payload.len() + 9);
    let checked = classify(&signed_buffer);
    assert_eq!(checked.status, SignatureStatus::Signed);
    assert_eq!(checked.payload, payload);

    // Unsign back to the original payload.
    let plain_path = dir.path().join("report.plain");
    let removed = ops::apply(Action::RemoveSign, &checked).unwrap();
    file_io::write_file_bytes(&plain_path, &removed).unwrap();
    let round_tripped = file_io::read_file_bytes(&plain_path, &config).unwrap();
    assert_eq!(round_tripped, payload);
}

#[test]
fn tampering_on_disk_is_detected_and_resign_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default();
    let path = dir.path().join("notes.signed");

    let signed = ops::apply(Action::AddSign, &classify(b"meeting notes")).unwrap();
    file_io::write_file_bytes(&path, &signed).unwrap();

    // Edit one payload byte behind the signature's back.
    let mut edited = file_io::read_file_bytes(&path, &config).unwrap();
    edited[0] ^= 0x20;
    file_io::write_file_bytes(&path, &edited).unwrap();

    let checked = classify(&file_io::read_file_bytes(&path, &config).unwrap());
    assert_eq!(checked.status, SignatureStatus::ChangedData);

    let resigned = ops::apply(Action::Resign, &checked).unwrap();
    file_io::write_file_bytes(&path, &resigned).unwrap();
    let rechecked = classify(&file_io::read_file_bytes(&path, &config).unwrap());
    assert_eq!(rechecked.status, SignatureStatus::Signed);
    assert_eq!(rechecked.payload, checked.payload);
}

#[test]
fn empty_file_signs_to_a_bare_trailer() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default();
    let path = dir.path().join("empty.bin");
    file_io::write_file_bytes(&path, &[]).unwrap();

    let buffer = file_io::read_file_bytes(&path, &config).unwrap();
    let checked = classify(&buffer);
    assert_eq!(checked.status, SignatureStatus::Unsigned);

    let signed = ops::apply(Action::AddSign, &checked).unwrap();
    // Empty payload hashes to 0: eight zero bytes then the flag.
    assert_eq!(signed, [0, 0, 0, 0, 0, 0, 0, 0, 0xFF]);

    let resigned_check = classify(&signed);
    assert_eq!(resigned_check.status, SignatureStatus::Signed);
    assert!(resigned_check.payload.is_empty());
}

#[test]
fn oversized_input_never_reaches_the_detector() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge.bin");
    std::fs::write(&path, vec![7u8; 1024]).unwrap();

    let mut config = Config::default();
    config.max_file_size = Some(512);
    let err = file_io::read_file_bytes(&path, &config).unwrap_err();
    assert!(matches!(err, TailsigError::FileTooLarge { .. }));
}

#[test]
fn in_place_transform_requires_opt_in() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.bin");
    file_io::write_file_bytes(&path, b"payload").unwrap();

    let default_config = Config::default();
    let err = file_io::resolve_output_path(&path, Some(path.clone()), &default_config).unwrap_err();
    assert!(matches!(err, TailsigError::InPlaceRefused { .. }));

    let mut permissive = Config::default();
    permissive.allow_in_place = Some(true);
    let resolved = file_io::resolve_output_path(&path, Some(path.clone()), &permissive).unwrap();
    assert_eq!(resolved, path);

    // The atomic write makes in-place signing safe once opted in.
    let buffer = file_io::read_file_bytes(&path, &permissive).unwrap();
    let signed = ops::apply(Action::AddSign, &classify(&buffer)).unwrap();
    file_io::write_file_bytes(&resolved, &signed).unwrap();
    let checked = classify(&file_io::read_file_bytes(&path, &permissive).unwrap());
    assert_eq!(checked.status, SignatureStatus::Signed);
    assert_eq!(checked.payload, b"payload");
}

#[test]
fn exit_action_writes_nothing() {
    let classification = classify(b"anything");
    assert!(ops::apply(Action::Exit, &classification).is_none());
}

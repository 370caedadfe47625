use std::fs;

use sidekick_core::crypto::{decrypt_armored, encrypt_armored, encrypt_with_params, KdfParams};
use sidekick_core::decrypt_auto;

#[test]
fn test_encrypted_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("note.txt.enc");
    let passphrase = "test-passphrase-secure-123";
    let plaintext = "journal entry: hello world";

    let encrypted = encrypt_with_params(plaintext, passphrase, &KdfParams::new(1024, 1, 1))
        .expect("encryption should succeed");
    fs::write(&path, format!("{}\n", encrypted)).expect("write should succeed");

    let on_disk = fs::read_to_string(&path).expect("read should succeed");
    assert!(!on_disk.contains(plaintext));

    let decrypted = decrypt_auto(&on_disk, passphrase).expect("decryption should succeed");
    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_armored_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("note.txt.age");
    let passphrase = "test-passphrase-secure-123";
    let plaintext = "armored entry";

    let armored = encrypt_armored(plaintext, passphrase).expect("encryption should succeed");
    fs::write(&path, &armored).expect("write should succeed");

    let on_disk = fs::read_to_string(&path).expect("read should succeed");
    assert_eq!(
        decrypt_armored(&on_disk, passphrase).expect("decryption should succeed"),
        plaintext
    );
    assert_eq!(decrypt_auto(&on_disk, passphrase).unwrap(), plaintext);
}

#[test]
fn test_armored_file_wrong_passphrase_fails() {
    let armored = encrypt_armored("secret entry", "correct-passphrase-123").unwrap();
    let result = decrypt_armored(&armored, "wrong-passphrase-456");
    assert!(result.unwrap_err().is_decryption());
}

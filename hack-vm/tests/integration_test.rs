use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn run_vm(input: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_hack-vm"))
        .arg(input)
        .output()
        .expect("failed to run hack-vm")
}

#[test]
fn single_file_mode_writes_stem_asm_beside_the_input() {
    let vm = fixtures_dir().join("SimpleAdd.vm");
    let expected_output = fixtures_dir().join("SimpleAdd.asm");
    fs::remove_file(&expected_output).ok();

    let output = run_vm(&vm);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let asm = fs::read_to_string(&expected_output).expect("missing SimpleAdd.asm");
    assert!(!asm.contains("bootstrap"), "single-file mode must not emit a bootstrap");
    assert!(asm.contains("@7\n"));
    assert!(asm.contains("@8\n"));

    fs::remove_file(&expected_output).ok();
}

#[test]
fn stack_test_covers_every_segment() {
    let vm = fixtures_dir().join("StackTest.vm");
    let expected_output = fixtures_dir().join("StackTest.asm");
    fs::remove_file(&expected_output).ok();

    let output = run_vm(&vm);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let asm = fs::read_to_string(&expected_output).expect("missing StackTest.asm");
    assert!(asm.contains("(EQ0)"));
    assert!(asm.contains("(GT1)"));
    assert!(asm.contains("@LCL\n"));
    assert!(asm.contains("@THIS\n") || asm.contains("@THAT\n"));
    assert!(asm.contains("@8\n")); // temp 3 -> RAM[5+3]
    assert!(asm.contains("@StackTest.2\n"));

    fs::remove_file(&expected_output).ok();
}

#[test]
fn directory_mode_bundles_bootstrap_and_every_unit() {
    let dir = fixtures_dir().join("FibonacciSys");
    let expected_output = dir.join("FibonacciSys.asm");
    fs::remove_file(&expected_output).ok();

    let output = run_vm(&dir);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let asm = fs::read_to_string(&expected_output).expect("missing FibonacciSys.asm");
    assert!(asm.starts_with("// bootstrap"));
    assert!(asm.contains("Sys.init$ret.0"));
    assert!(asm.contains("(Main.fibonacci)"));
    assert!(asm.contains("Main.fibonacci$ret.1"));
    assert!(asm.contains("Main.fibonacci$ret.2"));
    assert!(asm.contains("(N_LT_2)"));
    assert!(asm.contains("(WHILE)"));

    let main_pos = asm.find("(Main.fibonacci)").unwrap();
    let sys_pos = asm.find("(WHILE)").unwrap();
    assert!(main_pos < sys_pos, "Main.vm should be translated before Sys.vm");

    fs::remove_file(&expected_output).ok();
}

#[test]
fn unknown_segment_fails_with_nonzero_exit() {
    let dir = tempfile::tempdir().unwrap();
    let vm = dir.path().join("Bad.vm");
    fs::write(&vm, "push bogus 0\n").unwrap();

    let output = run_vm(&vm);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("bogus"));
}

#[test]
fn empty_directory_fails_with_nonzero_exit() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_vm(dir.path());
    assert!(!output.status.success());
}

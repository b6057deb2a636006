use std::process::Command;
use tempfile::tempdir;

const SAMPLE: &str = "\
>101M:A:sequence mol:protein length:11  MYOGLOBIN
MVLSEGEWQLV
>101M:A:secstr mol:protein length:11  MYOGLOBIN
  HHHHHHHHH
>102L:A:sequence mol:protein length:22  T4 LYSOZYME
MNIFEMLRID
EGLRLKIYKDTE
";

#[test]
fn splits_into_working_directory() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ss.txt");
    std::fs::write(&input, SAMPLE).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_pdb_fasta_splitter"))
        .current_dir(dir.path())
        .arg("-i")
        .arg(&input)
        .output()
        .expect("run pdb_fasta_splitter");
    assert_eq!(out.status.code(), Some(0), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "Found 2 protein sequences\nFound 1 ss sequences\n"
    );

    let protein = std::fs::read_to_string(dir.path().join("pdb_protein.fasta")).unwrap();
    assert_eq!(
        protein,
        ">101M:A:sequence mol:protein length:11  MYOGLOBIN\nMVLSEGEWQLV\n\
         >102L:A:sequence mol:protein length:22  T4 LYSOZYME\nMNIFEMLRIDEGLRLKIYKDTE\n"
    );
    let ss = std::fs::read_to_string(dir.path().join("pdb_ss.fasta")).unwrap();
    assert_eq!(
        ss,
        ">101M:A:secstr mol:protein length:11  MYOGLOBIN\n  HHHHHHHHH\n"
    );
}

#[test]
fn outdir_and_keyword_flags() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ss.txt");
    let outdir = dir.path().join("split");
    std::fs::create_dir(&outdir).unwrap();
    std::fs::write(&input, SAMPLE).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_pdb_fasta_splitter"))
        .args(["--keyword", "secstr", "--outdir"])
        .arg(&outdir)
        .arg("--infile")
        .arg(&input)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "Found 1 protein sequences\nFound 2 ss sequences\n"
    );
    assert!(outdir.join("pdb_protein.fasta").exists());
    assert!(outdir.join("pdb_ss.fasta").exists());
}

#[test]
fn malformed_input_fails_without_summary() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    std::fs::write(&input, ">a x\nACGT\n>b y\n").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_pdb_fasta_splitter"))
        .current_dir(dir.path())
        .arg("-i")
        .arg(&input)
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error:"), "{stderr}");
    assert!(!dir.path().join("pdb_protein.fasta").exists());
}

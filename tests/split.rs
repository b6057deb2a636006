use pdb_fasta_tools::{FastaReader, SplitOptions, open_output, parse_lines, split_records};
use std::io::BufReader;
use tempfile::tempdir;

const SAMPLE: &str = "\
>101M:A:sequence
MVLSEGEWQLV
>101M:A:secstr
HHHHHHH
>102L:A:sequence
MNIFEMLRIDE
GLRLKIYKDTE
>102L:A:secstr
  HHHHHHHH
";

#[test]
fn split_in_memory_preserves_order() {
    let set = FastaReader::from_bufread(BufReader::new(SAMPLE.as_bytes()))
        .read_all()
        .unwrap();
    let mut protein = Vec::<u8>::new();
    let mut ss = Vec::<u8>::new();
    let summary = split_records(&set, "sequence", &mut protein, &mut ss).unwrap();

    assert_eq!(summary.protein, 2);
    assert_eq!(summary.secondary_structure, 2);
    assert_eq!(
        String::from_utf8(protein).unwrap(),
        ">101M:A:sequence\nMVLSEGEWQLV\n>102L:A:sequence\nMNIFEMLRIDEGLRLKIYKDTE\n"
    );
    assert_eq!(
        String::from_utf8(ss).unwrap(),
        ">101M:A:secstr\nHHHHHHH\n>102L:A:secstr\n  HHHHHHHH\n"
    );
}

#[test]
fn split_to_default_file_names() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ss.txt");
    std::fs::write(&input, SAMPLE).unwrap();
    let opts = SplitOptions::default();

    let set = FastaReader::from_path(&input).unwrap().read_all().unwrap();
    let summary = {
        let mut protein = open_output(dir.path().join(&opts.protein_file)).unwrap();
        let mut ss = open_output(dir.path().join(&opts.ss_file)).unwrap();
        split_records(&set, &opts.keyword, &mut protein, &mut ss).unwrap()
    };
    assert_eq!(
        summary.to_string(),
        "Found 2 protein sequences\nFound 2 ss sequences"
    );

    let protein = std::fs::read_to_string(dir.path().join("pdb_protein.fasta")).unwrap();
    let ss = std::fs::read_to_string(dir.path().join("pdb_ss.fasta")).unwrap();
    let reparsed_protein = parse_lines(protein.lines()).unwrap();
    let reparsed_ss = parse_lines(ss.lines()).unwrap();
    assert_eq!(reparsed_protein.len() + reparsed_ss.len(), set.len());
    assert!(reparsed_protein.iter().all(|r| r.header.contains("sequence")));
    assert!(reparsed_ss.iter().all(|r| !r.header.contains("sequence")));
}

#[test]
fn custom_keyword() {
    let set = parse_lines([">a mol:na", "ACGU", ">b mol:protein", "MK"]).unwrap();
    let mut na = Vec::<u8>::new();
    let mut rest = Vec::<u8>::new();
    let summary = split_records(&set, "mol:na", &mut na, &mut rest).unwrap();
    assert_eq!((summary.protein, summary.secondary_structure), (1, 1));
    assert_eq!(String::from_utf8(na).unwrap(), ">a mol:na\nACGU\n");
}

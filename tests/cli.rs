use assert_cmd::Command;
use assert_fs::prelude::*;
use flate2::write::GzEncoder;
use flate2::Compression;
use indoc::indoc;
use predicates::prelude::*;
use std::io::Write;

const BINARY: &str = "seqlen";
type TestResult = Result<(), Box<dyn std::error::Error>>;

const FASTA: &str = indoc! {"
    >contig_1 length=10 coverage=3.5
    ACGT
    ACGT
    AC
    >contig_2
    GGGCC
    >contig_3 short one
    T
"};

const FASTQ: &str = indoc! {"
    @read_1 runid=abc
    ACGTACGT
    +
    IIIIIIII
    @read_2
    ACG
    +read_2
    III
"};

fn seqlen() -> Command {
    let mut cmd = Command::cargo_bin(BINARY).unwrap();
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn fasta_to_stdout() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let input = temp.child("contigs.fasta");
    input.write_str(FASTA)?;

    seqlen()
        .arg("-i")
        .arg(input.path())
        .assert()
        .success()
        .stdout(indoc! {"
            contig_1\t10
            contig_2\t5
            contig_3\t1
            Mean value:5.333333333333333
            Median value:5
            Max value:10
            Min value:1
            N50:10
        "});

    temp.close()?;
    Ok(())
}

#[test]
fn fasta_with_annotations() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let input = temp.child("contigs.fasta");
    input.write_str(FASTA)?;

    seqlen()
        .arg("-i")
        .arg(input.path())
        .arg("-n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(indoc! {"
            contig_1\tlength=10 coverage=3.5\t10
            contig_2\t\t5
            contig_3\tshort one\t1
        "}));

    temp.close()?;
    Ok(())
}

#[test]
fn output_file_and_summary() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let input = temp.child("contigs.fasta");
    input.write_str(FASTA)?;
    let output = temp.child("lengths.tsv");

    seqlen()
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Mean value:"))
        .stdout(predicate::str::contains("contig_1").not());

    output.assert("contig_1\t10\ncontig_2\t5\ncontig_3\t1\n");

    temp.close()?;
    Ok(())
}

#[test]
fn fastq_input() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let input = temp.child("reads.fastq");
    input.write_str(FASTQ)?;

    seqlen()
        .arg("-i")
        .arg(input.path())
        .arg("-f")
        .assert()
        .success()
        .stdout(indoc! {"
            read_1\t8
            read_2\t3
            Mean value:5.5
            Median value:8
            Max value:8
            Min value:3
            N50:8
        "});

    temp.close()?;
    Ok(())
}

#[test]
fn gzipped_fastq_input() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let input = temp.child("reads.fastq.gz");

    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(FASTQ.as_bytes())?;
    input.write_binary(&enc.finish()?)?;

    seqlen()
        .arg("-i")
        .arg(input.path())
        .arg("-f")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("read_1\t8\nread_2\t3\n"));

    temp.close()?;
    Ok(())
}

#[test]
fn reduced_report() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let input = temp.child("contigs.fasta");
    input.write_str(FASTA)?;

    seqlen()
        .arg("-i")
        .arg(input.path())
        .args(["--report", "reduced"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "Mean value:5.333333333333333\nMedian value:5\n",
        ))
        .stdout(predicate::str::contains("N50").not());

    temp.close()?;
    Ok(())
}

#[test]
fn reference_n50_dataset() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let input = temp.child("n50.fasta");
    let fasta: String = [2, 2, 2, 3, 3, 4, 8, 8]
        .iter()
        .enumerate()
        .map(|(i, len)| format!(">s{i}\n{}\n", "A".repeat(*len)))
        .collect();
    input.write_str(&fasta)?;

    seqlen()
        .arg("-i")
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "Mean value:4.0\nMedian value:3\nMax value:8\nMin value:2\nN50:6\n",
        ));

    temp.close()?;
    Ok(())
}

#[test]
fn file_doesnt_exist() -> TestResult {
    seqlen()
        .arg("-i")
        .arg("file_which_does_not_exist.fasta")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "file_which_does_not_exist.fasta does not exist.",
        ));

    Ok(())
}

#[test]
fn input_is_a_directory() -> TestResult {
    let temp = assert_fs::TempDir::new()?;

    seqlen()
        .arg("-i")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a directory"));

    temp.close()?;
    Ok(())
}

#[test]
fn empty_input_is_an_error() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let input = temp.child("empty.fasta");
    input.touch()?;

    seqlen()
        .arg("-i")
        .arg(input.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("NaN").not())
        .stderr(predicate::str::contains("no records were found"));

    temp.close()?;
    Ok(())
}

#[test]
fn empty_gzip_input_is_an_error() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let input = temp.child("empty.fa.gz");
    input.touch()?;

    seqlen()
        .arg("-i")
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no records were found"))
        .stderr(predicate::str::contains("cannot open").not());

    temp.close()?;
    Ok(())
}

#[test]
fn malformed_header_keeps_earlier_records() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let input = temp.child("contigs.fasta");
    input.write_str(">contig_1\nACGT\n> no identifier\nAC\n")?;

    seqlen()
        .arg("-i")
        .arg(input.path())
        .assert()
        .failure()
        .stdout("contig_1\t4\n")
        .stderr(predicate::str::contains("empty identifier"));

    temp.close()?;
    Ok(())
}

#[test]
fn truncated_fastq_keeps_earlier_records() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let input = temp.child("reads.fastq");
    input.write_str("@read_1\nACGT\n+\nIIII\n@read_2\nACGT\n")?;

    seqlen()
        .arg("-i")
        .arg(input.path())
        .arg("-f")
        .assert()
        .failure()
        .stdout("read_1\t4\n")
        .stderr(predicate::str::contains("truncated record"))
        .stderr(predicate::str::contains("read_2"));

    temp.close()?;
    Ok(())
}

#[test]
fn unwritable_output() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let input = temp.child("contigs.fasta");
    input.write_str(FASTA)?;

    seqlen()
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(temp.path().join("missing_dir").join("out.tsv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to write output"));

    temp.close()?;
    Ok(())
}

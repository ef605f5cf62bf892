#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().join("msds");
        fs::create_dir_all(&dir).expect("create scan dir");
        Self { _tmp: tmp, dir }
    }

    /// Command running inside the scan directory, as a user would.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("msds-scan");
        cmd.current_dir(&self.dir).env_remove("RUST_LOG");
        cmd
    }

    pub fn stdout(&self) -> String {
        let out = self.cmd().assert().success().get_output().stdout.clone();
        String::from_utf8(out).expect("utf8 stdout")
    }

    pub fn run_json(&self) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn add_pdf(&self, name: &str, pages: &[&[&str]]) -> PathBuf {
        let path = self.dir.join(name);
        write_pdf(&path, pages);
        path
    }

    pub fn add_pdf_with_bad_font(&self, name: &str, pages: &[&[&str]]) -> PathBuf {
        let path = self.dir.join(name);
        write_pdf_with_font_type(&path, pages, "XObject");
        path
    }

    pub fn add_file(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, bytes).expect("write fixture file");
        path
    }
}

/// Writes a PDF with one page per entry; each string is its own text line.
pub fn write_pdf(path: &Path, pages: &[&[&str]]) {
    write_pdf_with_font_type(path, pages, "Font");
}

/// Same as [`write_pdf`] but `/F1` carries the given `/Type`; anything other than
/// `Font` makes the file load fine and break during text extraction.
pub fn write_pdf_with_font_type(path: &Path, pages: &[&[&str]], font_type: &str) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => font_type,
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 10.into()]));
            operations.push(Operation::new(
                "Td",
                vec![50.into(), (780 - 14 * i as i64).into()],
            ));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode page content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).expect("save fixture pdf");
}

pub const WATER_PAGE: &[&str] = &[
    "SAFETY DATA SHEET",
    "Product name :Water Product Number",
    "CAS-No. :7732-18-5 1.2",
];

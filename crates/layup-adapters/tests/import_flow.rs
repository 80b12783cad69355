//! End-to-end import flows through the real service and in-memory adapters.

use std::fs;
use std::path::Path;

use layup_adapters::host::HostOp;
use layup_adapters::{LocalScanner, MemoryHost, MemoryScanner, PresetPicker, ScriptHost};
use layup_core::application::ports::DocumentId;
use layup_core::application::{ImportService, NO_FILES_ALERT};
use layup_core::domain::{FileOrder, FlattenMode, ImportOptions, ImportOutcome, SuffixMatch};

fn service_with(host: MemoryHost, picker: PresetPicker, scanner: MemoryScanner) -> ImportService {
    ImportService::new(Box::new(host), Box::new(picker), Box::new(scanner))
}

#[test]
fn imports_each_candidate_onto_its_own_layer() {
    let host = MemoryHost::new();
    let scanner = MemoryScanner::new().with_dir(
        "/maps",
        &["a.pdf", "b.PDF", "note.txt", "report.pdf.bak", "map.v2.pdf"],
    );
    let service = service_with(host.clone(), PresetPicker::new("/maps"), scanner);

    let outcome = service.run(&ImportOptions::default()).unwrap();
    assert_eq!(outcome, ImportOutcome::Completed { layers: 2 });

    let doc = DocumentId::new(0);
    assert!(host.is_open(doc));
    // First candidate reuses the initial layer, second adds one
    assert_eq!(host.layer_count(doc), 2);
    assert_eq!(host.layer_names(doc), vec!["a", "map"]);

    // Everything placed is embedded and, by default, flattened
    let art = host.artwork(doc);
    assert_eq!(art.len(), 2);
    assert!(art.iter().all(|i| i.embedded && !i.grouped && !i.masked));

    // The artboard was fitted around every item with no margin
    let fit = host.artboard_fit(doc).unwrap();
    assert_eq!(fit.items, 2);
    assert_eq!(fit.margin, 0.0);
}

#[test]
fn ignore_case_admits_uppercase_suffixes() {
    let host = MemoryHost::new();
    let scanner = MemoryScanner::new().with_dir("/maps", &["a.pdf", "b.PDF", "note.txt"]);
    let service = service_with(host.clone(), PresetPicker::new("/maps"), scanner);

    let options = ImportOptions::default().with_suffix_match(SuffixMatch::AnyCase);
    let outcome = service.run(&options).unwrap();

    assert_eq!(outcome, ImportOutcome::Completed { layers: 2 });
    assert_eq!(host.layer_names(DocumentId::new(0)), vec!["a", "b"]);
}

#[test]
fn layer_order_follows_discovery_unless_sorted() {
    let discovered = MemoryHost::new();
    let scanner = MemoryScanner::new().with_dir("/maps", &["zeta.pdf", "alpha.pdf", "mid.pdf"]);
    service_with(
        discovered.clone(),
        PresetPicker::new("/maps"),
        scanner.clone(),
    )
    .run(&ImportOptions::default())
    .unwrap();
    assert_eq!(
        discovered.layer_names(DocumentId::new(0)),
        vec!["zeta", "alpha", "mid"]
    );

    let sorted = MemoryHost::new();
    service_with(sorted.clone(), PresetPicker::new("/maps"), scanner)
        .run(&ImportOptions::default().with_order(FileOrder::ByName))
        .unwrap();
    assert_eq!(
        sorted.layer_names(DocumentId::new(0)),
        vec!["alpha", "mid", "zeta"]
    );
}

#[test]
fn empty_folder_alerts_and_closes_the_document() {
    let host = MemoryHost::new();
    let scanner = MemoryScanner::new().with_dir("/maps", &["note.txt", ".pdf"]);
    let service = service_with(host.clone(), PresetPicker::new("/maps"), scanner);

    let outcome = service.run(&ImportOptions::default()).unwrap();
    assert_eq!(outcome, ImportOutcome::NoFilesFound);

    let doc = DocumentId::new(0);
    assert_eq!(host.document_count(), 1);
    assert!(!host.is_open(doc));
    assert_eq!(host.alerts(), vec![NO_FILES_ALERT]);
    // The initial layer is untouched: no renames, no art
    assert_eq!(host.layer_names(doc), vec!["Layer 1"]);
    assert!(host.artwork(doc).is_empty());

    // Alert strictly precedes close
    let journal = host.journal();
    let alert = journal
        .iter()
        .position(|op| matches!(op, HostOp::Alert(_)))
        .unwrap();
    let close = journal
        .iter()
        .position(|op| matches!(op, HostOp::CloseDocument(_)))
        .unwrap();
    assert!(alert < close);
}

#[test]
fn cancelling_the_prompt_leaves_the_host_untouched() {
    let host = MemoryHost::new();
    let scanner = MemoryScanner::new().with_dir("/maps", &["a.pdf"]);
    let service = service_with(host.clone(), PresetPicker::cancelled(), scanner);

    let outcome = service.run(&ImportOptions::default()).unwrap();
    assert_eq!(outcome, ImportOutcome::Cancelled);
    assert_eq!(host.document_count(), 0);
    assert!(host.journal().is_empty());
}

#[test]
fn embed_precedes_flatten_commands_for_every_file() {
    let host = MemoryHost::new();
    let scanner = MemoryScanner::new().with_dir("/maps", &["a.pdf", "b.pdf"]);
    let service = service_with(host.clone(), PresetPicker::new("/maps"), scanner);

    service.run(&ImportOptions::default()).unwrap();

    let journal = host.journal();
    let mut embeds_seen = 0;
    let mut menus_seen = 0;
    for op in &journal {
        match op {
            HostOp::Embed(_) => embeds_seen += 1,
            HostOp::MenuCommand(_) => {
                // Each pair of flatten commands follows its file's embed
                assert!(menus_seen < embeds_seen * 2);
                menus_seen += 1;
            }
            _ => {}
        }
    }
    assert_eq!(embeds_seen, 2);
    assert_eq!(menus_seen, 4);
}

#[test]
fn keep_groups_skips_the_flatten_commands() {
    let host = MemoryHost::new();
    let scanner = MemoryScanner::new().with_dir("/maps", &["a.pdf"]);
    let service = service_with(host.clone(), PresetPicker::new("/maps"), scanner);

    let options = ImportOptions::default().with_flatten(FlattenMode::Preserve);
    service.run(&options).unwrap();

    let art = host.artwork(DocumentId::new(0));
    assert!(art[0].embedded && art[0].grouped && art[0].masked);
    assert!(
        !host
            .journal()
            .iter()
            .any(|op| matches!(op, HostOp::MenuCommand(_)))
    );
}

#[test]
fn independent_runs_produce_identical_documents() {
    let host = MemoryHost::new();
    let scanner = MemoryScanner::new().with_dir("/maps", &["a.pdf", "b.pdf"]);

    for _ in 0..2 {
        let service = service_with(
            host.clone(),
            PresetPicker::new("/maps"),
            scanner.clone(),
        );
        let outcome = service.run(&ImportOptions::default()).unwrap();
        assert_eq!(outcome, ImportOutcome::Completed { layers: 2 });
    }

    assert_eq!(host.document_count(), 2);
    let first = DocumentId::new(0);
    let second = DocumentId::new(1);
    assert_eq!(host.layer_names(first), host.layer_names(second));
    assert_eq!(host.layer_count(first), host.layer_count(second));
}

#[test]
fn script_host_renders_a_full_driver_program() {
    let host = ScriptHost::new();
    let scanner = MemoryScanner::new().with_dir("/maps", &["coast.pdf", "grid.v2.pdf"]);
    let service = ImportService::new(
        Box::new(host.clone()),
        Box::new(PresetPicker::new("/maps")),
        Box::new(scanner),
    );

    let outcome = service.run(&ImportOptions::default()).unwrap();
    assert_eq!(outcome, ImportOutcome::Completed { layers: 2 });

    let script = host.render().unwrap();
    let order = [
        "var doc0 = app.documents.add();",
        "var layer0 = doc0.layers[0];",
        "layer0.name = \"coast\";",
        "var item0 = layer0.placedItems.add();",
        "item0.file = new File(\"/maps/coast.pdf\");",
        "item0.embed();",
        "doc0.activeLayer = layer0;",
        "app.executeMenuCommand(\"ungroup\");",
        "app.executeMenuCommand(\"releaseMask\");",
        "var layer1 = doc0.layers.add();",
        "layer1.name = \"grid\";",
        "doc0.fitArtboardToSelectedArt(0);",
    ];
    let mut last = 0;
    for needle in order {
        let at = script[last..]
            .find(needle)
            .unwrap_or_else(|| panic!("missing or out of order: {needle}"));
        last += at + needle.len();
    }
}

#[test]
fn preview_matches_what_a_run_would_import() {
    let host = MemoryHost::new();
    let scanner =
        MemoryScanner::new().with_dir("/maps", &["b.pdf", "a.pdf", "skip.txt", "c.PDF"]);
    let service = service_with(host.clone(), PresetPicker::new("/maps"), scanner);

    let plan = service
        .preview("/maps", &ImportOptions::default())
        .unwrap();
    let planned: Vec<&str> = plan.entries().iter().map(|e| e.file.file_name()).collect();
    assert_eq!(planned, vec!["b.pdf", "a.pdf"]);

    // Previewing touched no host state
    assert_eq!(host.document_count(), 0);

    service.run(&ImportOptions::default()).unwrap();
    assert_eq!(host.layer_names(DocumentId::new(0)), vec!["b", "a"]);
}

#[test]
fn local_scanner_feeds_the_import_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("coast.pdf"), b"%PDF-1.4").unwrap();
    fs::write(dir.path().join("readme.md"), b"notes").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("inner.pdf"), b"%PDF-1.4").unwrap();

    let host = MemoryHost::new();
    let service = ImportService::new(
        Box::new(host.clone()),
        Box::new(PresetPicker::new(dir.path())),
        Box::new(LocalScanner::new()),
    );

    let outcome = service.run(&ImportOptions::default()).unwrap();
    assert_eq!(outcome, ImportOutcome::Completed { layers: 1 });
    assert_eq!(host.layer_names(DocumentId::new(0)), vec!["coast"]);

    let art = host.artwork(DocumentId::new(0));
    assert_eq!(art[0].source, dir.path().join("coast.pdf"));
}

#[test]
fn missing_directory_surfaces_as_an_error_not_an_outcome() {
    let host = MemoryHost::new();
    let service = ImportService::new(
        Box::new(host.clone()),
        Box::new(PresetPicker::new("/definitely/not/here")),
        Box::new(LocalScanner::new()),
    );

    assert!(service.run(&ImportOptions::default()).is_err());
    // The document had already been created when the scan failed
    assert_eq!(host.document_count(), 1);
}

#[test]
fn written_driver_script_lands_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("import.jsx");

    let host = ScriptHost::new();
    let scanner = MemoryScanner::new().with_dir("/maps", &["a.pdf"]);
    let service = ImportService::new(
        Box::new(host.clone()),
        Box::new(PresetPicker::new("/maps")),
        Box::new(scanner),
    );
    service.run(&ImportOptions::default()).unwrap();
    host.write_to(&out).unwrap();

    let script = fs::read_to_string(&out).unwrap();
    assert!(script.starts_with("// Generated by layup "));
    assert!(script.contains("app.documents.add();"));
}

//! Drawing host that renders its calls as an ExtendScript driver.
//!
//! The import service drives this host exactly like any other; instead of
//! mutating a document it records each call as one ExtendScript statement
//! against the drawing application's scripting API. The accumulated program
//! can then be rendered with [`ScriptHost::render`] and handed to the host
//! application to replay the import for real.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use layup_core::{
    application::{
        ApplicationError,
        ports::{DocumentId, DrawingHost, LayerId, PlacedItemId},
    },
    domain::MenuCommand,
    error::{Context as _, LayupError, LayupResult},
};

#[derive(Debug, Default)]
struct ScriptState {
    statements: Vec<String>,
    doc_vars: HashMap<DocumentId, String>,
    layer_vars: HashMap<LayerId, String>,
    item_vars: HashMap<PlacedItemId, String>,
    initial_layers: HashMap<DocumentId, LayerId>,
    next_doc: u32,
    next_layer: u32,
    next_item: u32,
}

impl ScriptState {
    fn doc_var(&self, doc: DocumentId) -> LayupResult<&str> {
        self.doc_vars
            .get(&doc)
            .map(String::as_str)
            .ok_or_else(|| unknown("document", doc.to_string()))
    }

    fn layer_var(&self, layer: LayerId) -> LayupResult<&str> {
        self.layer_vars
            .get(&layer)
            .map(String::as_str)
            .ok_or_else(|| unknown("layer", layer.to_string()))
    }

    fn item_var(&self, item: PlacedItemId) -> LayupResult<&str> {
        self.item_vars
            .get(&item)
            .map(String::as_str)
            .ok_or_else(|| unknown("placed item", item.to_string()))
    }
}

fn unknown(kind: &'static str, handle: String) -> LayupError {
    ApplicationError::UnknownHandle { kind, handle }.into()
}

/// Escape a string for use inside a double-quoted ExtendScript literal.
fn escape_js(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a point value the way the scripting API expects: integral margins
/// without a trailing `.0`.
fn format_points(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Drawing host that emits an ExtendScript driver program.
///
/// `Clone` shares the underlying program, so the CLI can keep a handle,
/// hand one to the service, and render afterwards.
#[derive(Debug, Clone)]
pub struct ScriptHost {
    session: Uuid,
    created_at: DateTime<Utc>,
    inner: Arc<RwLock<ScriptState>>,
}

impl ScriptHost {
    /// Create a host with an empty program and a fresh session id.
    pub fn new() -> Self {
        Self {
            session: Uuid::new_v4(),
            created_at: Utc::now(),
            inner: Arc::new(RwLock::new(ScriptState::default())),
        }
    }

    /// The session id stamped into the rendered header.
    pub fn session(&self) -> Uuid {
        self.session
    }

    /// Number of statements recorded so far.
    pub fn statement_count(&self) -> usize {
        self.inner.read().map(|s| s.statements.len()).unwrap_or(0)
    }

    /// Render the recorded program as ExtendScript source.
    pub fn render(&self) -> LayupResult<String> {
        let inner = self.read()?;
        let mut out = String::new();
        out.push_str(&format!(
            "// Generated by layup {} on {}\n",
            env!("CARGO_PKG_VERSION"),
            self.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        out.push_str(&format!("// Session {}\n\n", self.session));
        for statement in &inner.statements {
            out.push_str(statement);
            out.push('\n');
        }
        Ok(out)
    }

    /// Render and write the program to `path`.
    pub fn write_to(&self, path: &Path) -> LayupResult<()> {
        let script = self.render()?;
        std::fs::write(path, script).context(format!(
            "writing driver script to {}",
            path.display()
        ))
    }

    fn read(&self) -> LayupResult<RwLockReadGuard<'_, ScriptState>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::HostStatePoisoned.into())
    }

    fn write(&self) -> LayupResult<RwLockWriteGuard<'_, ScriptState>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::HostStatePoisoned.into())
    }
}

impl Default for ScriptHost {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingHost for ScriptHost {
    fn create_document(&self) -> LayupResult<DocumentId> {
        let mut inner = self.write()?;
        let doc = DocumentId::new(inner.next_doc);
        let var = format!("doc{}", inner.next_doc);
        inner.next_doc += 1;
        inner
            .statements
            .push(format!("var {var} = app.documents.add();"));
        inner.doc_vars.insert(doc, var);
        Ok(doc)
    }

    fn close_document(&self, doc: DocumentId) -> LayupResult<()> {
        let mut inner = self.write()?;
        let statement = format!(
            "{}.close(SaveOptions.DONOTSAVECHANGES);",
            inner.doc_var(doc)?
        );
        inner.statements.push(statement);
        Ok(())
    }

    fn initial_layer(&self, doc: DocumentId) -> LayupResult<LayerId> {
        let mut inner = self.write()?;
        if let Some(&layer) = inner.initial_layers.get(&doc) {
            return Ok(layer);
        }
        let layer = LayerId::new(inner.next_layer);
        let var = format!("layer{}", inner.next_layer);
        inner.next_layer += 1;
        let statement = format!("var {var} = {}.layers[0];", inner.doc_var(doc)?);
        inner.statements.push(statement);
        inner.layer_vars.insert(layer, var);
        inner.initial_layers.insert(doc, layer);
        Ok(layer)
    }

    fn add_layer(&self, doc: DocumentId) -> LayupResult<LayerId> {
        let mut inner = self.write()?;
        let layer = LayerId::new(inner.next_layer);
        let var = format!("layer{}", inner.next_layer);
        inner.next_layer += 1;
        let statement = format!("var {var} = {}.layers.add();", inner.doc_var(doc)?);
        inner.statements.push(statement);
        inner.layer_vars.insert(layer, var);
        Ok(layer)
    }

    fn rename_layer(&self, doc: DocumentId, layer: LayerId, name: &str) -> LayupResult<()> {
        let mut inner = self.write()?;
        inner.doc_var(doc)?;
        let statement = format!("{}.name = \"{}\";", inner.layer_var(layer)?, escape_js(name));
        inner.statements.push(statement);
        Ok(())
    }

    fn place_file(
        &self,
        doc: DocumentId,
        layer: LayerId,
        path: &Path,
    ) -> LayupResult<PlacedItemId> {
        let mut inner = self.write()?;
        inner.doc_var(doc)?;
        let item = PlacedItemId::new(inner.next_item);
        let var = format!("item{}", inner.next_item);
        inner.next_item += 1;
        let placed = format!("var {var} = {}.placedItems.add();", inner.layer_var(layer)?);
        inner.statements.push(placed);
        inner.statements.push(format!(
            "{var}.file = new File(\"{}\");",
            escape_js(&path.display().to_string())
        ));
        inner.item_vars.insert(item, var);
        Ok(item)
    }

    fn embed(&self, doc: DocumentId, item: PlacedItemId) -> LayupResult<()> {
        let mut inner = self.write()?;
        inner.doc_var(doc)?;
        let statement = format!("{}.embed();", inner.item_var(item)?);
        inner.statements.push(statement);
        Ok(())
    }

    fn set_active_layer(&self, doc: DocumentId, layer: LayerId) -> LayupResult<()> {
        let mut inner = self.write()?;
        let statement = format!(
            "{}.activeLayer = {};",
            inner.doc_var(doc)?,
            inner.layer_var(layer)?
        );
        inner.statements.push(statement);
        Ok(())
    }

    fn run_menu_command(&self, doc: DocumentId, command: MenuCommand) -> LayupResult<()> {
        let mut inner = self.write()?;
        inner.doc_var(doc)?;
        inner.statements.push(format!(
            "app.executeMenuCommand(\"{}\");",
            command.token()
        ));
        Ok(())
    }

    fn fit_artboard_to_art(&self, doc: DocumentId, margin: f64) -> LayupResult<()> {
        let mut inner = self.write()?;
        let statement = format!(
            "{}.fitArtboardToSelectedArt({});",
            inner.doc_var(doc)?,
            format_points(margin)
        );
        inner.statements.push(statement);
        Ok(())
    }

    fn alert(&self, message: &str) -> LayupResult<()> {
        let mut inner = self.write()?;
        inner
            .statements
            .push(format!("alert(\"{}\");", escape_js(message)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(script: &str, needle: &str) -> usize {
        script
            .find(needle)
            .unwrap_or_else(|| panic!("statement {needle:?} not found in:\n{script}"))
    }

    #[test]
    fn renders_the_classic_import_sequence() {
        let host = ScriptHost::new();
        let doc = host.create_document().unwrap();
        let layer = host.initial_layer(doc).unwrap();
        host.rename_layer(doc, layer, "coast").unwrap();
        let item = host
            .place_file(doc, layer, Path::new("/maps/coast.pdf"))
            .unwrap();
        host.embed(doc, item).unwrap();
        host.set_active_layer(doc, layer).unwrap();
        host.run_menu_command(doc, MenuCommand::Ungroup).unwrap();
        host.run_menu_command(doc, MenuCommand::ReleaseClippingMask)
            .unwrap();
        host.fit_artboard_to_art(doc, 0.0).unwrap();

        let script = host.render().unwrap();
        let create = position(&script, "var doc0 = app.documents.add();");
        let initial = position(&script, "var layer0 = doc0.layers[0];");
        let rename = position(&script, "layer0.name = \"coast\";");
        let place = position(&script, "var item0 = layer0.placedItems.add();");
        let file = position(&script, "item0.file = new File(\"/maps/coast.pdf\");");
        let embed = position(&script, "item0.embed();");
        let activate = position(&script, "doc0.activeLayer = layer0;");
        let ungroup = position(&script, "app.executeMenuCommand(\"ungroup\");");
        let release = position(&script, "app.executeMenuCommand(\"releaseMask\");");
        let fit = position(&script, "doc0.fitArtboardToSelectedArt(0);");

        assert!(create < initial && initial < rename && rename < place);
        assert!(place < file && file < embed && embed < activate);
        assert!(activate < ungroup && ungroup < release && release < fit);
    }

    #[test]
    fn header_names_the_generator_and_session() {
        let host = ScriptHost::new();
        let script = host.render().unwrap();

        assert!(script.starts_with("// Generated by layup "));
        assert!(script.contains(&format!("// Session {}", host.session())));
    }

    #[test]
    fn initial_layer_is_declared_once() {
        let host = ScriptHost::new();
        let doc = host.create_document().unwrap();
        let first = host.initial_layer(doc).unwrap();
        let second = host.initial_layer(doc).unwrap();
        assert_eq!(first, second);

        let script = host.render().unwrap();
        assert_eq!(script.matches("doc0.layers[0]").count(), 1);
    }

    #[test]
    fn strings_are_escaped() {
        let host = ScriptHost::new();
        let doc = host.create_document().unwrap();
        let layer = host.initial_layer(doc).unwrap();
        host.rename_layer(doc, layer, "say \"hi\"\\now").unwrap();

        let script = host.render().unwrap();
        assert!(script.contains(r#"layer0.name = "say \"hi\"\\now";"#));
    }

    #[test]
    fn close_discards_changes() {
        let host = ScriptHost::new();
        let doc = host.create_document().unwrap();
        host.alert("No PDF files found").unwrap();
        host.close_document(doc).unwrap();

        let script = host.render().unwrap();
        let alert = position(&script, "alert(\"No PDF files found\");");
        let close = position(&script, "doc0.close(SaveOptions.DONOTSAVECHANGES);");
        assert!(alert < close);
    }

    #[test]
    fn unknown_handles_are_rejected() {
        let host = ScriptHost::new();
        let err = host.initial_layer(DocumentId::new(3)).unwrap_err();
        assert!(matches!(
            err,
            LayupError::Application(ApplicationError::UnknownHandle { .. })
        ));
    }

    #[test]
    fn fractional_margins_keep_their_decimals() {
        assert_eq!(format_points(0.0), "0");
        assert_eq!(format_points(12.0), "12");
        assert_eq!(format_points(6.5), "6.5");
    }

    #[test]
    fn written_script_round_trips_through_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("driver.jsx");

        let host = ScriptHost::new();
        host.create_document().unwrap();
        host.write_to(&out).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.contains("app.documents.add();"));
    }
}

//! In-memory drawing host for testing and dry runs.

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockWriteGuard},
};

use layup_core::{
    application::{
        ApplicationError,
        ports::{DocumentId, DrawingHost, LayerId, PlacedItemId},
    },
    domain::MenuCommand,
    error::{LayupError, LayupResult},
};

/// One journaled host call, in execution order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostOp {
    CreateDocument(DocumentId),
    CloseDocument(DocumentId),
    InitialLayer(DocumentId, LayerId),
    AddLayer(DocumentId, LayerId),
    RenameLayer(LayerId, String),
    PlaceFile(LayerId, PathBuf),
    Embed(PlacedItemId),
    SetActiveLayer(LayerId),
    MenuCommand(&'static str),
    FitArtboard { margin: f64 },
    Alert(String),
}

impl fmt::Display for HostOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDocument(doc) => write!(f, "create {doc}"),
            Self::CloseDocument(doc) => write!(f, "close {doc}"),
            Self::InitialLayer(doc, layer) => write!(f, "initial layer of {doc} -> {layer}"),
            Self::AddLayer(doc, layer) => write!(f, "add {layer} to {doc}"),
            Self::RenameLayer(layer, name) => write!(f, "rename {layer} to {name:?}"),
            Self::PlaceFile(layer, path) => write!(f, "place {} on {layer}", path.display()),
            Self::Embed(item) => write!(f, "embed {item}"),
            Self::SetActiveLayer(layer) => write!(f, "activate {layer}"),
            Self::MenuCommand(token) => write!(f, "menu {token}"),
            Self::FitArtboard { margin } => write!(f, "fit artboard (margin {margin})"),
            Self::Alert(message) => write!(f, "alert {message:?}"),
        }
    }
}

/// Snapshot of one piece of art (testing helper).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtItem {
    pub id: PlacedItemId,
    pub source: PathBuf,
    pub embedded: bool,
    pub grouped: bool,
    pub masked: bool,
}

/// Record of the last artboard fit (testing helper).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArtboardFit {
    pub margin: f64,
    pub items: usize,
}

#[derive(Debug)]
struct LayerRecord {
    id: LayerId,
    name: String,
    items: Vec<ArtItem>,
}

#[derive(Debug)]
struct DocumentRecord {
    id: DocumentId,
    open: bool,
    layers: Vec<LayerRecord>,
    active_layer: LayerId,
    selection: Vec<PlacedItemId>,
    artboard_fit: Option<ArtboardFit>,
}

impl DocumentRecord {
    fn layer(&self, layer: LayerId) -> LayupResult<&LayerRecord> {
        self.layers
            .iter()
            .find(|l| l.id == layer)
            .ok_or_else(|| unknown("layer", layer))
    }

    fn layer_mut(&mut self, layer: LayerId) -> LayupResult<&mut LayerRecord> {
        self.layers
            .iter_mut()
            .find(|l| l.id == layer)
            .ok_or_else(|| unknown("layer", layer))
    }
}

#[derive(Debug, Default)]
struct HostState {
    documents: Vec<DocumentRecord>,
    journal: Vec<HostOp>,
    alerts: Vec<String>,
    next_layer: u32,
    next_item: u32,
}

impl HostState {
    fn document(&self, doc: DocumentId) -> LayupResult<&DocumentRecord> {
        self.documents
            .iter()
            .find(|d| d.id == doc)
            .ok_or_else(|| unknown("document", doc))
    }

    fn open_document_mut(
        &mut self,
        doc: DocumentId,
        operation: &'static str,
    ) -> LayupResult<&mut DocumentRecord> {
        let record = self
            .documents
            .iter_mut()
            .find(|d| d.id == doc)
            .ok_or_else(|| unknown("document", doc))?;
        if !record.open {
            return Err(ApplicationError::HostFailure {
                operation,
                reason: "document is closed".into(),
            }
            .into());
        }
        Ok(record)
    }

    fn mint_layer(&mut self) -> LayerId {
        let id = LayerId::new(self.next_layer);
        self.next_layer += 1;
        id
    }

    fn mint_item(&mut self) -> PlacedItemId {
        let id = PlacedItemId::new(self.next_item);
        self.next_item += 1;
        id
    }
}

fn unknown(kind: &'static str, handle: impl fmt::Display) -> LayupError {
    ApplicationError::UnknownHandle {
        kind,
        handle: handle.to_string(),
    }
    .into()
}

/// In-memory drawing host for testing and `--dry-run`.
///
/// Models documents, layers, per-item embed/group/mask state, explicit
/// selection and active-layer state, and keeps an append-only journal of
/// every call so tests can assert ordering.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    inner: Arc<RwLock<HostState>>,
}

impl MemoryHost {
    /// Create a new host with no documents.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HostState::default())),
        }
    }

    fn write(&self) -> LayupResult<RwLockWriteGuard<'_, HostState>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::HostStatePoisoned.into())
    }

    // ── Inspection helpers (testing / dry-run reporting) ─────────────────

    /// Number of documents ever created, open or closed.
    pub fn document_count(&self) -> usize {
        self.inner.read().unwrap().documents.len()
    }

    /// Whether `doc` exists and is still open.
    pub fn is_open(&self, doc: DocumentId) -> bool {
        let inner = self.inner.read().unwrap();
        inner.documents.iter().any(|d| d.id == doc && d.open)
    }

    /// Layer names of `doc`, in stacking order.
    pub fn layer_names(&self, doc: DocumentId) -> Vec<String> {
        let inner = self.inner.read().unwrap();
        inner
            .document(doc)
            .map(|d| d.layers.iter().map(|l| l.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Number of layers in `doc`.
    pub fn layer_count(&self, doc: DocumentId) -> usize {
        let inner = self.inner.read().unwrap();
        inner.document(doc).map(|d| d.layers.len()).unwrap_or(0)
    }

    /// All art in `doc`, layer by layer.
    pub fn artwork(&self, doc: DocumentId) -> Vec<ArtItem> {
        let inner = self.inner.read().unwrap();
        inner
            .document(doc)
            .map(|d| {
                d.layers
                    .iter()
                    .flat_map(|l| l.items.iter().cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The active layer of `doc`.
    pub fn active_layer(&self, doc: DocumentId) -> Option<LayerId> {
        let inner = self.inner.read().unwrap();
        inner.document(doc).ok().map(|d| d.active_layer)
    }

    /// The current selection of `doc`.
    pub fn selection(&self, doc: DocumentId) -> Vec<PlacedItemId> {
        let inner = self.inner.read().unwrap();
        inner
            .document(doc)
            .map(|d| d.selection.clone())
            .unwrap_or_default()
    }

    /// The last artboard fit applied to `doc`.
    pub fn artboard_fit(&self, doc: DocumentId) -> Option<ArtboardFit> {
        let inner = self.inner.read().unwrap();
        inner.document(doc).ok().and_then(|d| d.artboard_fit)
    }

    /// Every alert shown so far.
    pub fn alerts(&self) -> Vec<String> {
        self.inner.read().unwrap().alerts.clone()
    }

    /// The full operation journal, in call order.
    pub fn journal(&self) -> Vec<HostOp> {
        self.inner.read().unwrap().journal.clone()
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingHost for MemoryHost {
    fn create_document(&self) -> LayupResult<DocumentId> {
        let mut inner = self.write()?;
        let doc = DocumentId::new(inner.documents.len() as u32);
        let initial = inner.mint_layer();
        inner.documents.push(DocumentRecord {
            id: doc,
            open: true,
            layers: vec![LayerRecord {
                id: initial,
                name: "Layer 1".into(),
                items: Vec::new(),
            }],
            active_layer: initial,
            selection: Vec::new(),
            artboard_fit: None,
        });
        inner.journal.push(HostOp::CreateDocument(doc));
        Ok(doc)
    }

    fn close_document(&self, doc: DocumentId) -> LayupResult<()> {
        let mut inner = self.write()?;
        let record = inner.open_document_mut(doc, "close")?;
        record.open = false;
        inner.journal.push(HostOp::CloseDocument(doc));
        Ok(())
    }

    fn initial_layer(&self, doc: DocumentId) -> LayupResult<LayerId> {
        let mut inner = self.write()?;
        let record = inner.open_document_mut(doc, "initial layer")?;
        // A document always has at least the layer it was created with
        let layer = record.layers[0].id;
        inner.journal.push(HostOp::InitialLayer(doc, layer));
        Ok(layer)
    }

    fn add_layer(&self, doc: DocumentId) -> LayupResult<LayerId> {
        let mut inner = self.write()?;
        let layer = inner.mint_layer();
        let record = inner.open_document_mut(doc, "add layer")?;
        let name = format!("Layer {}", record.layers.len() + 1);
        record.layers.push(LayerRecord {
            id: layer,
            name,
            items: Vec::new(),
        });
        inner.journal.push(HostOp::AddLayer(doc, layer));
        Ok(layer)
    }

    fn rename_layer(&self, doc: DocumentId, layer: LayerId, name: &str) -> LayupResult<()> {
        let mut inner = self.write()?;
        let record = inner.open_document_mut(doc, "rename layer")?;
        record.layer_mut(layer)?.name = name.to_owned();
        inner
            .journal
            .push(HostOp::RenameLayer(layer, name.to_owned()));
        Ok(())
    }

    fn place_file(
        &self,
        doc: DocumentId,
        layer: LayerId,
        path: &Path,
    ) -> LayupResult<PlacedItemId> {
        let mut inner = self.write()?;
        let item = inner.mint_item();
        let record = inner.open_document_mut(doc, "place file")?;
        record.layer_mut(layer)?.items.push(ArtItem {
            id: item,
            source: path.to_path_buf(),
            embedded: false,
            grouped: false,
            masked: false,
        });
        // Placing selects the new item, replacing any prior selection
        record.selection = vec![item];
        inner.journal.push(HostOp::PlaceFile(layer, path.to_path_buf()));
        Ok(item)
    }

    fn embed(&self, doc: DocumentId, item: PlacedItemId) -> LayupResult<()> {
        let mut inner = self.write()?;
        let record = inner.open_document_mut(doc, "embed")?;
        let art = record
            .layers
            .iter_mut()
            .flat_map(|l| l.items.iter_mut())
            .find(|a| a.id == item)
            .ok_or_else(|| unknown("placed item", item))?;
        if art.embedded {
            return Err(ApplicationError::HostFailure {
                operation: "embed",
                reason: "item is already embedded".into(),
            }
            .into());
        }
        // Embedding turns the link into a masked group of local art
        art.embedded = true;
        art.grouped = true;
        art.masked = true;
        inner.journal.push(HostOp::Embed(item));
        Ok(())
    }

    fn set_active_layer(&self, doc: DocumentId, layer: LayerId) -> LayupResult<()> {
        let mut inner = self.write()?;
        let record = inner.open_document_mut(doc, "set active layer")?;
        record.layer(layer)?;
        record.active_layer = layer;
        inner.journal.push(HostOp::SetActiveLayer(layer));
        Ok(())
    }

    fn run_menu_command(&self, doc: DocumentId, command: MenuCommand) -> LayupResult<()> {
        let mut inner = self.write()?;
        let record = inner.open_document_mut(doc, "menu command")?;
        // Menu commands act on selected items of the active layer only;
        // with nothing selected they are a silent no-op, as in the host app
        let active = record.active_layer;
        let selection = record.selection.clone();
        let layer = record.layer_mut(active)?;
        for art in layer.items.iter_mut().filter(|a| selection.contains(&a.id)) {
            match command {
                MenuCommand::Ungroup => art.grouped = false,
                MenuCommand::ReleaseClippingMask => art.masked = false,
            }
        }
        inner.journal.push(HostOp::MenuCommand(command.token()));
        Ok(())
    }

    fn fit_artboard_to_art(&self, doc: DocumentId, margin: f64) -> LayupResult<()> {
        let mut inner = self.write()?;
        let record = inner.open_document_mut(doc, "fit artboard")?;
        let items = record.layers.iter().map(|l| l.items.len()).sum();
        record.artboard_fit = Some(ArtboardFit { margin, items });
        inner.journal.push(HostOp::FitArtboard { margin });
        Ok(())
    }

    fn alert(&self, message: &str) -> LayupResult<()> {
        let mut inner = self.write()?;
        inner.alerts.push(message.to_owned());
        inner.journal.push(HostOp::Alert(message.to_owned()));
        Ok(())
    }
}

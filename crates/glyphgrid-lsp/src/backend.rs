//! LSP backend: document store, diagnostics, hover, and completion.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Arc;

use glyphgrid_layout::{parse_str, Entity, EntityTable, ParseError};
use log::debug;
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::analysis::{completion_context, in_grid, word_at, Context};
use crate::knowledge::{attr_by_name, kind_doc, AttrKind, ATTRS, KINDS};

// ── Document ──────────────────────────────────────────────────────────────────

/// An open layout file and the last entity table that parsed cleanly.
///
/// The table survives edits that break the file so hover and id
/// completion keep working while the user types.
struct Document {
    text: String,
    entities: EntityTable,
}

// ── Backend ───────────────────────────────────────────────────────────────────

pub struct Backend {
    client: Client,
    docs: Arc<RwLock<HashMap<Url, Document>>>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            docs: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn update(&self, uri: Url, text: String) {
        let mut docs = self.docs.write().await;
        let previous = docs.remove(&uri).map(|d| d.entities).unwrap_or_default();
        let (diagnostics, entities) = reparse(&text, previous);
        debug!("{uri}: {} entities, {} diagnostics", entities.len(), diagnostics.len());
        docs.insert(uri.clone(), Document { text, entities });
        drop(docs);

        self.client
            .publish_diagnostics(uri, diagnostics, None)
            .await;
    }
}

// ── LanguageServer impl ───────────────────────────────────────────────────────

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, _params: InitializeParams) -> Result<InitializeResult> {
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec![
                        ">".to_string(),
                        ",".to_string(),
                        "=".to_string(),
                    ]),
                    ..Default::default()
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "glyphgrid-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _params: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "glyphgrid-lsp ready")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    // ── Document lifecycle ────────────────────────────────────────────────────

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.update(params.text_document.uri, params.text_document.text)
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // FULL sync: the last change carries the whole text.
        if let Some(change) = params.content_changes.into_iter().last() {
            self.update(params.text_document.uri, change.text).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.docs.write().await.remove(&params.text_document.uri);
    }

    // ── Hover ─────────────────────────────────────────────────────────────────

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let pos = &params.text_document_position_params.position;

        let docs = self.docs.read().await;
        let Some(doc) = docs.get(uri) else {
            return Ok(None);
        };
        let Some(word) = word_at(&doc.text, pos) else {
            return Ok(None);
        };

        if let Some(entity) = doc.entities.get(word) {
            return Ok(Some(markdown_hover(entity_markdown(entity))));
        }
        // Attribute and kind names only mean something in the property section.
        if in_grid(&doc.text, pos.line as usize) {
            return Ok(None);
        }
        if let Some(attr) = attr_by_name(word) {
            let md = format!("**{}** · {}\n\n{}", attr.name, attr.kind.label(), attr.doc);
            return Ok(Some(markdown_hover(md)));
        }
        if let Some(about) = kind_doc(word) {
            return Ok(Some(markdown_hover(format!("**{word}** · kind\n\n{about}"))));
        }

        Ok(None)
    }

    // ── Completion ────────────────────────────────────────────────────────────

    async fn completion(
        &self,
        params: CompletionParams,
    ) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let pos = &params.text_document_position.position;

        let docs = self.docs.read().await;
        let Some(doc) = docs.get(uri) else {
            return Ok(None);
        };

        let items = match completion_context(&doc.text, pos) {
            Context::Grid => vec![],
            Context::EntityId => entity_items(&doc.entities),
            Context::Key { .. } => key_items(),
            Context::Value { key, .. } => value_items(&key),
        };

        Ok(Some(CompletionResponse::Array(items)))
    }
}

// ── Diagnostics ───────────────────────────────────────────────────────────────

/// Parse `text`, keeping `previous` as the entity table when it fails.
fn reparse(text: &str, previous: EntityTable) -> (Vec<Diagnostic>, EntityTable) {
    match parse_str(text) {
        Ok(entities) => (vec![], entities),
        Err(e) => (vec![error_diagnostic(&e)], previous),
    }
}

fn error_diagnostic(e: &ParseError) -> Diagnostic {
    // ParseError line/col are 1-based; LSP Position is 0-based.
    let line = e.line.saturating_sub(1) as u32;
    let col  = e.col.saturating_sub(1) as u32;
    Diagnostic {
        range: Range {
            start: Position::new(line, col),
            end:   Position::new(line, col + 1),
        },
        severity: Some(DiagnosticSeverity::ERROR),
        source: Some("glyphgrid-lsp".to_string()),
        message: e.kind.to_string(),
        ..Default::default()
    }
}

// ── Completion item builders ──────────────────────────────────────────────────

fn entity_items(entities: &EntityTable) -> Vec<CompletionItem> {
    entities
        .iter()
        .filter(|e| !e.id.is_empty())
        .map(|e| {
            let detail = format!("{} at ({}, {})", e.kind, e.x, e.y);
            let mut item = CompletionItem::new_simple(e.id.clone(), detail);
            item.kind = Some(CompletionItemKind::VARIABLE);
            item.insert_text = Some(format!("{} -> $0", e.id));
            item.insert_text_format = Some(InsertTextFormat::SNIPPET);
            item
        })
        .collect()
}

fn key_items() -> Vec<CompletionItem> {
    ATTRS
        .iter()
        .map(|a| {
            let mut item = CompletionItem::new_simple(a.name.to_string(), a.doc.to_string());
            item.kind = Some(CompletionItemKind::PROPERTY);
            item.insert_text = Some(format!("{}=$0", a.name));
            item.insert_text_format = Some(InsertTextFormat::SNIPPET);
            item
        })
        .collect()
}

fn value_items(key: &str) -> Vec<CompletionItem> {
    match attr_by_name(key).map(|a| a.kind) {
        Some(AttrKind::Kind) => KINDS
            .iter()
            .map(|(name, doc)| {
                let mut item = CompletionItem::new_simple(name.to_string(), doc.to_string());
                item.kind = Some(CompletionItemKind::ENUM_MEMBER);
                item
            })
            .collect(),
        _ => vec![],
    }
}

// ── Misc helpers ──────────────────────────────────────────────────────────────

fn entity_markdown(entity: &Entity) -> String {
    let mut md = format!(
        "**{}** · {}\n\nat ({}, {}), {}×{} cells",
        entity.id, entity.kind, entity.x, entity.y, entity.width, entity.height
    );
    let mut attrs = entity.attrs().peekable();
    if attrs.peek().is_some() {
        md.push_str("\n\n| key | value |\n|---|---|");
        for (key, value) in attrs {
            let _ = write!(md, "\n| `{key}` | {value} |");
        }
    }
    md
}

fn markdown_hover(md: String) -> Hover {
    Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: md,
        }),
        range: None,
    }
}

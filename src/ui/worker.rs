//! Bridge between the synchronous UI loop and the async store client.
//!
//! The UI sends [`UiCommand`]s; each one runs as its own tokio task and its
//! outcome comes back as an [`AppEvent::Store`]. Concurrent calls are not
//! coordinated: whichever response arrives last wins.

use std::sync::mpsc as std_mpsc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::catalog::{CatalogItem, ItemDraft, ItemId};
use crate::store::{ItemStoreClient, StoreError};
use crate::ui::editor::SaveTicket;
use crate::ui::events::AppEvent;

const COMMAND_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    FetchItems,
    CreateItem { draft: ItemDraft, ticket: SaveTicket },
    UpdateItem { item: CatalogItem, ticket: SaveTicket },
    DeleteItem(ItemId),
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create { ticket: SaveTicket },
    Update { ticket: SaveTicket },
    Delete,
}

impl Mutation {
    /// Ticket of the editor save this outcome answers, if any.
    pub fn ticket(self) -> Option<SaveTicket> {
        match self {
            Mutation::Create { ticket } | Mutation::Update { ticket } => Some(ticket),
            Mutation::Delete => None,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Mutation::Create { .. } => "Skin added",
            Mutation::Update { .. } => "Skin updated",
            Mutation::Delete => "Skin deleted",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Mutation::Create { .. } | Mutation::Update { .. } => "Failed to save skin",
            Mutation::Delete => "Failed to delete skin",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    ItemsLoaded(Vec<CatalogItem>),
    FetchFailed(String),
    MutationSucceeded(Mutation),
    MutationFailed { mutation: Mutation, message: String },
}

/// Run one command against the store.
pub async fn execute(client: &ItemStoreClient, command: UiCommand) -> StoreEvent {
    match command {
        UiCommand::FetchItems => match client.list().await {
            Ok(items) => StoreEvent::ItemsLoaded(items),
            Err(err) => {
                tracing::debug!(kind = err.kind(), "Item list fetch failed");
                StoreEvent::FetchFailed(err.user_message())
            }
        },
        UiCommand::CreateItem { draft, ticket } => {
            mutation_event(Mutation::Create { ticket }, client.create(&draft).await)
        }
        UiCommand::UpdateItem { item, ticket } => {
            mutation_event(Mutation::Update { ticket }, client.update(&item).await)
        }
        UiCommand::DeleteItem(id) => mutation_event(Mutation::Delete, client.delete(id).await),
    }
}

fn mutation_event(mutation: Mutation, result: Result<(), StoreError>) -> StoreEvent {
    match result {
        Ok(()) => StoreEvent::MutationSucceeded(mutation),
        Err(err) => {
            tracing::debug!(?mutation, kind = err.kind(), "Item mutation failed");
            StoreEvent::MutationFailed {
                mutation,
                message: err.user_message(),
            }
        }
    }
}

/// Start the worker on `runtime` and return the command sender.
pub fn spawn_store_worker(
    runtime: &Handle,
    client: ItemStoreClient,
    events: std_mpsc::Sender<AppEvent>,
) -> UiCommandSender {
    let (sender, mut receiver) = mpsc::channel::<UiCommand>(COMMAND_BUFFER);
    let handle = runtime.clone();

    runtime.spawn(async move {
        while let Some(command) = receiver.recv().await {
            tracing::debug!(?command, "Store command");
            let client = client.clone();
            let events = events.clone();
            handle.spawn(async move {
                let event = execute(&client, command).await;
                if events.send(AppEvent::Store(event)).is_err() {
                    tracing::trace!("Store result dropped (UI gone)");
                }
            });
        }
        tracing::debug!("Store worker stopped");
    });

    sender
}

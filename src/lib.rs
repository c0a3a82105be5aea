//! # inventory_api
//! A small inventory tracker: an HTTP/JSON service over a single collection of
//! inventory records, plus the client-side view controller that drives it.
//!
//! The server dispatches every request through a [`mediator::DefaultAsyncMediator`]:
//! reads are [`queries`], writes are [`commands`], and successful writes publish
//! [`events`]. Records live in an [`services::InventoryStore`] (Redis or memory).
//!
//! The [`view`] module holds the client state (items, search text, drafts),
//! computes the aggregate views and renders them; it talks to the server through
//! [`client::InventoryApi`].

pub mod app;
pub mod client;
pub mod commands;
pub mod config;
pub mod endpoints;
pub mod events;
pub mod models;
pub mod queries;
pub mod services;
pub mod view;

use mediator::DefaultAsyncMediator;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type SharedMediator = Arc<Mutex<DefaultAsyncMediator>>;

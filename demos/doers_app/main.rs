//! Doers Application Walkthrough
//!
//! This demo wires the entistate crates together the way a UI layer
//! would:
//! - Registering doers through validated drafts
//! - Mirroring the remote collection with a `RemoteStore`
//! - Rendering a sorted, paginated table view
//! - Surfacing an absorbed network failure
//!
//! Run with: cargo run -p doers_app

use entistate_adapter::EntityAdapter;
use entistate_models::{Doer, DoerColumn, DoerDraft};
use entistate_store::{RemoteStore, ResourceClient};
use entistate_table::{DataTable, TableView};
use entistate_testkit::{doer_api, sample_doers};
use std::sync::Arc;

fn render(table: &DataTable<Doer, DoerColumn>) {
    match table.view() {
        TableView::Empty => println!("  You currently do not have any doers."),
        TableView::Page {
            rows,
            page,
            total_pages,
            has_prev,
            has_next,
        } => {
            println!("  {:>3}  {:<12} {:<12} {:>11}", "id", "first name", "last name", "total todos");
            for doer in rows {
                println!(
                    "  {:>3}  {:<12} {:<12} {:>11}",
                    doer.id, doer.first_name, doer.last_name, doer.total_todos
                );
            }
            let prev = if has_prev { "<prev" } else { "     " };
            let next = if has_next { "next>" } else { "     " };
            println!("  {} page {}/{} {}", prev, page, total_pages, next);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Doers Application Walkthrough");
    println!("=============================\n");

    // A loopback REST server stands in for the backend.
    let api = Arc::new(doer_api(&sample_doers()));
    let adapter = EntityAdapter::with_sort_comparer(|a: &Doer, b: &Doer| a.id.cmp(&b.id));
    let client = ResourceClient::new(api.base_url().to_string(), Arc::clone(&api));
    let mut store = RemoteStore::new(adapter, client);

    // Register a new doer through the validated form path.
    let draft = DoerDraft::new("Nancy", "Drew");
    match draft.validate() {
        Ok(()) => {
            let created = store.create(&draft).expect("create succeeds");
            println!("[+] Registered doer #{} {} {}", created.id, created.first_name, created.last_name);
        }
        Err(errors) => {
            for error in errors {
                println!("[!] {error}");
            }
        }
    }

    // An invalid draft never reaches the store.
    let invalid = DoerDraft::new("", "Abcdefghijklmnopqrstuvwxyz");
    if let Err(errors) = invalid.validate() {
        println!("[!] Submission blocked:");
        for error in &errors {
            println!("      {error}");
        }
    }

    // Mirror the full collection.
    store.fetch_all();
    println!("\n[OK] Fetched {} doers", store.total());

    // Render page 1, then page through.
    let mut table: DataTable<Doer, DoerColumn> = DataTable::new();
    table.set_rows(store.all().into_iter().cloned().collect());
    println!("\n[*] Doer list:");
    render(&table);

    table.next_page();
    println!("\n[*] Next page:");
    render(&table);

    // Click-to-sort: first name ascending, then descending.
    table.click_header(DoerColumn::FirstName);
    table.click_header(DoerColumn::FirstName);
    println!("\n[*] Sorted by first name, descending:");
    render(&table);

    // A dropped connection is absorbed into the error field.
    api.go_offline("connection refused");
    if !store.fetch_all() {
        println!("\n[!] Refresh failed: {}", store.error().unwrap_or("unknown"));
        println!("    Collection still holds {} doers", store.total());
    }
    api.go_online();

    // Remove a doer and re-render against the shrunk collection.
    let last_id = store.all().last().map(|d| d.id).expect("store not empty");
    store.remove(&last_id);
    println!("\n[-] Removed doer #{last_id}");
    table.set_rows(store.all().into_iter().cloned().collect());
    render(&table);

    Ok(())
}

//! In-memory store behaviour observed through the public API.

use std::sync::Arc;

use issueboard::issue::{
    adapters::memory::InMemoryIssueStore,
    domain::{IssueDraft, NewIssue},
    ports::IssueStore,
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_inserts_are_all_listed() -> eyre::Result<()> {
    let store = InMemoryIssueStore::with_clock(Arc::new(DefaultClock));
    let mut handles = Vec::new();
    for index in 0..8 {
        let writer = store.clone();
        handles.push(tokio::spawn(async move {
            let draft = IssueDraft::new(format!("Issue {index}"), "details")?;
            writer
                .insert(&NewIssue::new(draft, "ana@example.com"))
                .await?;
            Ok::<_, eyre::Report>(())
        }));
    }
    for handle in handles {
        handle.await??;
    }

    let listed = store.list_newest_first().await?;
    eyre::ensure!(listed.len() == 8);
    eyre::ensure!(
        listed
            .windows(2)
            .all(|pair| matches!(pair, [newer, older] if newer.created_at() >= older.created_at()))
    );
    Ok(())
}

// tests/concurrency.rs
//
// Concurrent ingest/search against one shared newsroom handle.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use news_pulse::{NewArticle, Newsroom};

#[test]
fn parallel_ingest_yields_unique_ids_and_complete_records() {
    let room = Newsroom::default();
    let threads = 10;
    let per_thread = 50;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let room = room.clone();
            thread::spawn(move || {
                (0..per_thread)
                    .map(|i| {
                        room.ingest_new(NewArticle::new(
                            format!("worker{t} item{i}"),
                            "concurrent body",
                        ))
                        .unwrap()
                        .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for h in handles {
        for id in h.join().expect("worker panicked") {
            assert!(ids.insert(id), "duplicate id");
        }
    }

    assert_eq!(ids.len(), threads * per_thread);
    let listed = room.list_articles();
    assert_eq!(listed.len(), threads * per_thread);
    assert!(listed.iter().all(|a| a.content == "concurrent body" && !a.id.is_empty()));
    assert_eq!(room.search("concurrent", usize::MAX).len(), threads * per_thread);
}

#[test]
fn put_is_visible_to_searches_started_after_it_returns() {
    let room = Arc::new(Newsroom::default());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let room = Arc::clone(&room);
            thread::spawn(move || {
                for i in 0..25 {
                    let title = format!("needle-{t}-{i}");
                    let a = room.ingest_new(NewArticle::new(title.clone(), "")).unwrap();
                    let hits = room.search(&title, 5);
                    assert!(hits.iter().any(|h| h.id == a.id), "{title} not visible");
                }
            })
        })
        .collect();

    for h in handles {
        h.join().expect("worker panicked");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn async_tasks_share_the_handle() {
    let room = Newsroom::default();
    let mut tasks = Vec::new();
    for i in 0..20 {
        let room = room.clone();
        tasks.push(tokio::spawn(async move {
            room.ingest_new(NewArticle::new(format!("task {i}"), "async"))
                .unwrap();
            room.search("async", usize::MAX).len()
        }));
    }
    for t in tasks {
        assert!(t.await.unwrap() >= 1);
    }
    assert_eq!(room.list_articles().len(), 20);
}

//! Integration tests for sharing optics across threads.
//!
//! Optics built from stateless representations and non-capturing closures
//! are `Send + Sync`, so one optic can be borrowed by many threads at once.

use ixoptics::control::Either;
use ixoptics::optics::{IxLensVl, chosen, ifst, ilens, isnd, to_ix_lens_vl};
use ixoptics::typeclass::{Identity, IdentityF};
use rstest::rstest;
use std::sync::Arc;
use std::thread;

fn assert_send_sync<T: Send + Sync>(_: &T) {}

#[rstest]
fn test_standard_optics_are_send_sync() {
    assert_send_sync(&chosen::<i32, i32>());
    assert_send_sync(&ifst::<String, u8, String>());
    assert_send_sync(&isnd::<u8, String, String>());
}

#[rstest]
fn test_scoped_threads_share_composed_optic() {
    let nested = isnd::<usize, (i64, char), (i64, char)>()
        .compose(ifst::<i64, char, i64>())
        .icompose(|outer, tag| (outer, tag));

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4_usize)
            .map(|worker| {
                let optic = &nested;
                scope.spawn(move || {
                    optic.iover((worker, (10, 'x')), |(outer, _tag), n| n + outer as i64)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("Thread panicked"))
            .collect()
    });

    for (worker, result) in results.into_iter().enumerate() {
        assert_eq!(result, (worker, (10 + worker as i64, 'x')));
    }
}

#[rstest]
fn test_arc_shared_van_laarhoven_function() {
    let lens = ilens(
        |pair: &(u32, String)| (pair.0, pair.1.clone()),
        |pair: (u32, String), text: String| (pair.0, text),
    );
    let vl = Arc::new(to_ix_lens_vl(lens));

    let handles: Vec<_> = (0..4_u32)
        .map(|worker| {
            let vl = Arc::clone(&vl);
            thread::spawn(move || {
                vl.run_vl::<IdentityF, _>(
                    |index, text: String| Identity(format!("{text}-{index}")),
                    (worker, "w".to_string()),
                )
                .into_inner()
            })
        })
        .collect();

    for (worker, handle) in handles.into_iter().enumerate() {
        let result = handle.join().expect("Thread panicked");
        assert_eq!(result, (worker as u32, format!("w-{worker}")));
    }
}

#[rstest]
fn test_chosen_used_from_many_threads() {
    let lens = chosen::<i32, i32>();

    thread::scope(|scope| {
        for value in 0..8 {
            scope.spawn(move || {
                let source = if value % 2 == 0 {
                    Either::Left(value)
                } else {
                    Either::Right(value)
                };
                let doubled = lens.over(source, |n| n * 2);
                assert_eq!(doubled.side(), source.side());
                assert_eq!(doubled.into_inner(), value * 2);
            });
        }
    });
}

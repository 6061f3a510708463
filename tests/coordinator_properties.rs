//! Property tests for the coordinator state machine.
//!
//! Random interleavings of term changes, render notifications, and fetch
//! completions are replayed against `handle_event`. Requests are answered
//! in arbitrary order and stale requests are never cancelled, which is the
//! worst case for the session guard.

use proptest::prelude::*;

use tunesearch::app::{handle_event, Action, AppState, Event, PageRequest, Phase};
use tunesearch::SearchRecord;

const PAGE_SIZE: usize = 4;
const LOOKAHEAD: usize = 2;

#[derive(Debug, Clone)]
enum Op {
    Term(&'static str),
    Render(usize),
    Resolve { pick: usize, len: usize },
    Fail { pick: usize },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop::sample::select(vec!["", "a", "b", "ab"]).prop_map(Op::Term),
        (0usize..40).prop_map(Op::Render),
        (any::<usize>(), 0usize..=PAGE_SIZE).prop_map(|(pick, len)| Op::Resolve { pick, len }),
        any::<usize>().prop_map(|pick| Op::Fail { pick }),
    ]
}

/// Records are named `term:position` so misplaced pages are detectable.
fn page_for(request: &PageRequest, len: usize) -> Vec<SearchRecord> {
    (0..len)
        .map(|i| SearchRecord::new(format!("{}:{}", request.term, request.offset + i), "artist"))
        .collect()
}

fn take(outstanding: &mut Vec<PageRequest>, pick: usize) -> Option<PageRequest> {
    if outstanding.is_empty() {
        None
    } else {
        Some(outstanding.remove(pick % outstanding.len()))
    }
}

fn check_invariants(state: &AppState, outstanding: &[PageRequest]) -> Result<(), TestCaseError> {
    let session = &state.session;
    let active = outstanding.iter().filter(|r| r.session == session.id).count();

    prop_assert!(active <= 1, "{active} fetches in flight for one session");
    prop_assert_eq!(state.is_loading(), active == 1);
    prop_assert_eq!(session.offset, session.results.len());

    for (i, record) in session.results.iter().enumerate() {
        let expected = format!("{}:{i}", session.term);
        prop_assert_eq!(record.title.as_deref(), Some(expected.as_str()));
    }

    match state.phase {
        Phase::Empty => prop_assert!(session.term.is_empty() && session.results.is_empty()),
        Phase::Errored => prop_assert!(state.error.is_some() && !session.has_more),
        Phase::Exhausted => prop_assert!(!session.has_more),
        Phase::Idle => prop_assert!(session.has_more),
        Phase::Fetching => {}
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn session_invariants_hold(ops in prop::collection::vec(op(), 1..80)) {
        let mut state = AppState::new(PAGE_SIZE, LOOKAHEAD);
        let mut outstanding: Vec<PageRequest> = Vec::new();

        for op in ops {
            let event = match op {
                Op::Term(term) => Event::TermChanged(term.to_string()),
                Op::Render(index) => Event::RenderedIndex(index),
                Op::Resolve { pick, len } => match take(&mut outstanding, pick) {
                    Some(request) => Event::PageLoaded {
                        session: request.session,
                        records: page_for(&request, len),
                    },
                    None => continue,
                },
                Op::Fail { pick } => match take(&mut outstanding, pick) {
                    Some(request) => Event::PageFailed {
                        session: request.session,
                        message: "boom".to_string(),
                    },
                    None => continue,
                },
            };

            let (_, actions) = handle_event(&mut state, event).unwrap();
            for action in actions {
                if let Action::FetchPage(request) = action {
                    prop_assert_eq!(request.offset, state.session.offset);
                    prop_assert_eq!(request.page_size, PAGE_SIZE);
                    outstanding.push(request);
                }
            }

            check_invariants(&state, &outstanding)?;
        }
    }

    #[test]
    fn stale_completions_never_change_the_snapshot(len in 0usize..=PAGE_SIZE, fail in any::<bool>()) {
        let mut state = AppState::new(PAGE_SIZE, LOOKAHEAD);
        let (_, actions) = handle_event(&mut state, Event::TermChanged("a".into())).unwrap();
        let Some(Action::FetchPage(stale)) = actions.into_iter().next() else {
            return Err(TestCaseError::fail("first page not requested"));
        };
        handle_event(&mut state, Event::TermChanged("b".into())).unwrap();
        let before = state.snapshot();

        let event = if fail {
            Event::PageFailed { session: stale.session, message: "late".into() }
        } else {
            Event::PageLoaded { session: stale.session, records: page_for(&stale, len) }
        };
        let (changed, actions) = handle_event(&mut state, event).unwrap();

        prop_assert!(!changed);
        prop_assert!(actions.is_empty());
        prop_assert_eq!(state.snapshot(), before);
    }
}

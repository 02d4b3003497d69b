//! At most one definition carries the highlight between transition completions, whatever the
//! order of activations and (possibly stale) completions.

use literate_analysis::{HeadlessHost, LiterateView, RecordingWidget, ViewOptions};
use literate_babel::dom::{find_by_id, parse_html, Selector};
use literate_babel::ComrakConverter;
use proptest::prelude::*;

const PAGE: &str = r##"<!DOCTYPE html><html><head><title>Ids</title></head><body><pre>
<span class="comment">/** First. */</span>
<span id="a">a</span> <a href="#b">b</a>
<span class="comment">/** Second. */</span>
<span id="b">b</span> <a href="#c">c</a>
<span class="comment">/** Third. */</span>
<span id="c">c</span> <span id="d">d</span> <a href="#a">a</a>
</pre></body></html>"##;

const IDS: [&str; 4] = ["a", "b", "c", "d"];

#[derive(Debug, Clone)]
enum Step {
    Activate(usize),
    FinishLatest,
    FinishOldest,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0..IDS.len()).prop_map(Step::Activate),
        Just(Step::FinishLatest),
        Just(Step::FinishOldest),
    ]
}

proptest! {
    #[test]
    fn single_definition_highlighted(steps in prop::collection::vec(step_strategy(), 1..30)) {
        let dom = parse_html(PAGE);
        let mut view = LiterateView::load(
            &dom,
            HeadlessHost::framed("http://host/ids.html?id=a"),
            RecordingWidget::default(),
            &ViewOptions::default(),
            &ComrakConverter::default(),
        )
        .unwrap();
        let highlighted = Selector::parse(".highlighted").unwrap();
        let mut tickets = Vec::new();
        tickets.extend(view.host().last_scroll());

        for step in steps {
            match step {
                Step::Activate(i) => {
                    let target = find_by_id(&dom.document, IDS[i]).unwrap();
                    view.activate(&target);
                    tickets.extend(view.host().last_scroll());
                }
                Step::FinishLatest => {
                    if let Some(ticket) = tickets.last() {
                        view.scroll_finished(*ticket);
                    }
                }
                Step::FinishOldest => {
                    if let Some(ticket) = tickets.first() {
                        view.scroll_finished(*ticket);
                    }
                }
            }
            prop_assert!(highlighted.select(&dom.document).len() <= 1);
        }
    }
}

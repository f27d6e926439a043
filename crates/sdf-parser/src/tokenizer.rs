//! html5ever tokenizer adapter producing [`TagEvent`]s.
//!
//! Only the tokenizer runs; there is no tree builder, so events keep the
//! exact order and nesting the page was written with, unbalanced tags
//! included. The extractor is expected to cope with that.

use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use sdf_core::TagEvent;

#[derive(Default)]
struct EventSink {
    events: RefCell<Vec<TagEvent>>,
}

impl EventSink {
    fn push_tag(&self, tag: Tag) -> TokenSinkResult<()> {
        let name = tag.name.to_string();
        let mut events = self.events.borrow_mut();
        match tag.kind {
            TagKind::StartTag => {
                let attrs = tag
                    .attrs
                    .into_iter()
                    .map(|a| (a.name.local.to_string(), a.value.to_string()))
                    .collect();
                events.push(TagEvent::Start {
                    name: name.clone(),
                    attrs,
                });
                if tag.self_closing {
                    events.push(TagEvent::End { name });
                    return TokenSinkResult::Continue;
                }
                // Script and style bodies are opaque; without this their
                // contents would be tokenized as markup.
                match name.as_str() {
                    "script" => TokenSinkResult::RawData(RawKind::ScriptData),
                    "style" => TokenSinkResult::RawData(RawKind::Rawtext),
                    _ => TokenSinkResult::Continue,
                }
            }
            TagKind::EndTag => {
                events.push(TagEvent::End { name });
                TokenSinkResult::Continue
            }
        }
    }

    /// Adjacent character tokens are coalesced into one text event.
    fn push_text(&self, text: &str) {
        let mut events = self.events.borrow_mut();
        if let Some(TagEvent::Text(last)) = events.last_mut() {
            last.push_str(text);
        } else {
            events.push(TagEvent::Text(text.to_string()));
        }
    }
}

impl TokenSink for EventSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => self.push_tag(tag),
            Token::CharacterTokens(text) => {
                self.push_text(&text);
                TokenSinkResult::Continue
            }
            _ => TokenSinkResult::Continue,
        }
    }
}

/// Flatten an HTML document into start/end/text events in document order.
///
/// Comments, doctypes and parse errors are dropped. Character references are
/// decoded (`&lt;link&gt;` arrives as `<link>`).
#[must_use]
pub fn tokenize(html: &str) -> Vec<TagEvent> {
    let tokenizer = Tokenizer::new(EventSink::default(), TokenizerOpts::default());
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    let events = tokenizer.sink.events.take();
    tracing::trace!(events = events.len(), "tokenized page");
    events
}

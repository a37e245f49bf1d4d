use counsel_core::domain::{Category, Industry, Session};
use serde::{Deserialize, Serialize};

use crate::blocks::{
    Block, BlockElement, ButtonElement, HomeView, MessageBuilder, MessageTemplate, ModalView,
    PlainTextInputElement, SelectOption, StaticSelectElement, TextObject,
};

pub const ACTION_INDUSTRY_SELECT: &str = "home.industry_select.v1";
pub const QUERY_MODAL_CALLBACK_ID: &str = "counsel.query.v1";
pub const QUERY_INPUT_BLOCK_ID: &str = "counsel.query.input.v1";
pub const QUERY_INPUT_ACTION_ID: &str = "counsel.query.text.v1";

/// Selection record attached to the query modal on open and handed back
/// unchanged on submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalMetadata {
    pub industry: Industry,
    pub category: Category,
}

impl ModalMetadata {
    pub fn encode(&self) -> String {
        // Two unit-variant enums; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

fn industry_select(initial: Option<Industry>) -> StaticSelectElement {
    let mut select = StaticSelectElement::new(ACTION_INDUSTRY_SELECT, "Select your industry");
    for industry in Industry::ALL {
        select = select.option(SelectOption::new(industry.label(), industry.value()));
    }
    if let Some(industry) = initial {
        select = select.initial_option(SelectOption::new(industry.label(), industry.value()));
    }
    select
}

/// Renders the home tab from the user's current session.
///
/// The industry picker is always present; the category section only
/// appears once an industry is chosen.
pub fn home_view(session: &Session) -> HomeView {
    let mut blocks = vec![
        Block::Section {
            block_id: "home.intro.v1".to_owned(),
            text: TextObject::mrkdwn(
                "*Welcome to Counsel* :wave:\nPick your industry and I'll tailor the advice.",
            ),
        },
        Block::Actions {
            block_id: "home.industry.v1".to_owned(),
            elements: vec![BlockElement::StaticSelect(industry_select(session.industry))],
        },
    ];

    if let Some(industry) = session.industry {
        blocks.push(Block::Section {
            block_id: "home.category_intro.v1".to_owned(),
            text: TextObject::mrkdwn(format!(
                "You're in *{}*. What would you like advice on?",
                industry.label()
            )),
        });
        blocks.push(Block::Actions {
            block_id: "home.categories.v1".to_owned(),
            elements: Category::ALL
                .into_iter()
                .map(|category| {
                    BlockElement::Button(
                        ButtonElement::new(category.action_id(), category.label())
                            .value(category.value()),
                    )
                })
                .collect(),
        });
    }

    HomeView::new(blocks)
}

/// Renders the free-text query modal for a completed selection.
pub fn query_modal(industry: Industry, category: Category) -> ModalView {
    ModalView::new(
        QUERY_MODAL_CALLBACK_ID,
        format!("{} advice", category.label()),
        ModalMetadata { industry, category }.encode(),
    )
    .submit_label("Ask")
    .block(Block::Input {
        block_id: QUERY_INPUT_BLOCK_ID.to_owned(),
        label: TextObject::plain(format!(
            "What do you want to know about {} for your {} business?",
            category.label().to_lowercase(),
            industry.label().to_lowercase()
        )),
        element: PlainTextInputElement {
            action_id: QUERY_INPUT_ACTION_ID.to_owned(),
            multiline: true,
            placeholder: Some(TextObject::plain("Ask anything...")),
        },
    })
}

/// Renders the answer posted back after a completion.
pub fn answer_message(industry: Industry, category: Category, answer: &str) -> MessageTemplate {
    MessageBuilder::new(format!("{} · {}: {answer}", industry.label(), category.label()))
        .section("answer.header.v1", |section| {
            section.mrkdwn(format!("*{} · {}*", industry.label(), category.label()));
        })
        .section("answer.body.v1", |section| {
            section.plain(answer);
        })
        .context("answer.context.v1", |context| {
            context.plain("Answered by Counsel");
        })
        .build()
}

/// Ephemeral response to the slash command. Reads no session state.
pub fn industry_picker_message() -> MessageTemplate {
    MessageBuilder::new("Pick an industry to get started")
        .section("picker.intro.v1", |section| {
            section.mrkdwn("Pick your *industry* and I'll tailor the advice.");
        })
        .actions("picker.industry.v1", |actions| {
            actions.select(industry_select(None));
        })
        .build()
}

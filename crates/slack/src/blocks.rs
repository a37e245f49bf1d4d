use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    Plain { text: String },
    Mrkdwn { text: String },
}

impl TextObject {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain { text: text.into() }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Plain { text } | Self::Mrkdwn { text } => text,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    Primary,
    Danger,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ButtonElement {
    pub action_id: String,
    pub text: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ButtonElement {
    pub fn new(action_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            text: TextObject::plain(label),
            style: None,
            value: None,
        }
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub text: TextObject,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { text: TextObject::plain(label), value: value.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StaticSelectElement {
    pub action_id: String,
    pub placeholder: TextObject,
    pub options: Vec<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<SelectOption>,
}

impl StaticSelectElement {
    pub fn new(action_id: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder: TextObject::plain(placeholder),
            options: Vec::new(),
            initial_option: None,
        }
    }

    pub fn option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn initial_option(mut self, option: SelectOption) -> Self {
        self.initial_option = Some(option);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlainTextInputElement {
    pub action_id: String,
    pub multiline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockElement {
    Button(ButtonElement),
    StaticSelect(StaticSelectElement),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section { block_id: String, text: TextObject },
    Actions { block_id: String, elements: Vec<BlockElement> },
    Context { block_id: String, elements: Vec<TextObject> },
    Input { block_id: String, label: TextObject, element: PlainTextInputElement },
}

/// Home-tab surface: a bare block list published per user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HomeView {
    #[serde(rename = "type")]
    view_type: &'static str,
    pub blocks: Vec<Block>,
}

impl HomeView {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { view_type: "home", blocks }
    }
}

/// Modal surface. `private_metadata` is attached on open and handed back
/// unchanged on submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModalView {
    #[serde(rename = "type")]
    view_type: &'static str,
    pub callback_id: String,
    pub title: TextObject,
    pub submit: TextObject,
    pub close: TextObject,
    pub private_metadata: String,
    pub blocks: Vec<Block>,
}

impl ModalView {
    pub fn new(
        callback_id: impl Into<String>,
        title: impl Into<String>,
        private_metadata: impl Into<String>,
    ) -> Self {
        Self {
            view_type: "modal",
            callback_id: callback_id.into(),
            title: TextObject::plain(title),
            submit: TextObject::plain("Submit"),
            close: TextObject::plain("Cancel"),
            private_metadata: private_metadata.into(),
            blocks: Vec::new(),
        }
    }

    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit = TextObject::plain(label);
        self
    }

    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MessageTemplate {
    pub fallback_text: String,
    pub blocks: Vec<Block>,
}

pub struct MessageBuilder {
    fallback_text: String,
    blocks: Vec<Block>,
}

impl MessageBuilder {
    pub fn new(fallback_text: impl Into<String>) -> Self {
        Self { fallback_text: fallback_text.into(), blocks: Vec::new() }
    }

    pub fn section<F>(mut self, block_id: impl Into<String>, build: F) -> Self
    where
        F: FnOnce(&mut SectionBuilder),
    {
        let mut builder = SectionBuilder::default();
        build(&mut builder);
        self.blocks.push(Block::Section { block_id: block_id.into(), text: builder.build() });
        self
    }

    pub fn actions<F>(mut self, block_id: impl Into<String>, build: F) -> Self
    where
        F: FnOnce(&mut ActionsBuilder),
    {
        let mut builder = ActionsBuilder::default();
        build(&mut builder);
        self.blocks.push(Block::Actions { block_id: block_id.into(), elements: builder.build() });
        self
    }

    pub fn context<F>(mut self, block_id: impl Into<String>, build: F) -> Self
    where
        F: FnOnce(&mut ContextBuilder),
    {
        let mut builder = ContextBuilder::default();
        build(&mut builder);
        self.blocks.push(Block::Context { block_id: block_id.into(), elements: builder.build() });
        self
    }

    pub fn build(self) -> MessageTemplate {
        MessageTemplate { fallback_text: self.fallback_text, blocks: self.blocks }
    }
}

#[derive(Default)]
pub struct SectionBuilder {
    text: Option<TextObject>,
}

impl SectionBuilder {
    pub fn plain(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(TextObject::plain(text));
        self
    }

    pub fn mrkdwn(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(TextObject::mrkdwn(text));
        self
    }

    fn build(self) -> TextObject {
        self.text.unwrap_or_else(|| TextObject::plain(""))
    }
}

#[derive(Default)]
pub struct ActionsBuilder {
    elements: Vec<BlockElement>,
}

impl ActionsBuilder {
    pub fn button(&mut self, button: ButtonElement) -> &mut Self {
        self.elements.push(BlockElement::Button(button));
        self
    }

    pub fn select(&mut self, select: StaticSelectElement) -> &mut Self {
        self.elements.push(BlockElement::StaticSelect(select));
        self
    }

    fn build(self) -> Vec<BlockElement> {
        self.elements
    }
}

#[derive(Default)]
pub struct ContextBuilder {
    elements: Vec<TextObject>,
}

impl ContextBuilder {
    pub fn plain(&mut self, text: impl Into<String>) -> &mut Self {
        self.elements.push(TextObject::plain(text));
        self
    }

    pub fn mrkdwn(&mut self, text: impl Into<String>) -> &mut Self {
        self.elements.push(TextObject::mrkdwn(text));
        self
    }

    fn build(self) -> Vec<TextObject> {
        self.elements
    }
}

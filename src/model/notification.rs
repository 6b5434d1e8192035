//! Embed payloads sent to organizers.
//!
//! Kept independent of serenity's builders so services can assemble and tests can
//! inspect them; the Discord layer converts them with [`EventEmbed::to_create_embed`].

use serenity::all::CreateEmbed;

/// A single named embed field.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Structured embed: a title and an ordered list of fields.
#[derive(Debug, Clone, PartialEq)]
pub struct EventEmbed {
    pub title: String,
    pub fields: Vec<EmbedField>,
}

impl EventEmbed {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field, preserving insertion order.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Looks up the value of the first field with the given name.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    pub fn to_create_embed(&self) -> CreateEmbed {
        self.fields.iter().fold(
            CreateEmbed::new().title(&self.title),
            |embed, field| embed.field(&field.name, &field.value, field.inline),
        )
    }
}

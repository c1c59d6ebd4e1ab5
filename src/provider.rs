//! Known model providers and their avatar icons

use ratatui::style::Color;

/// Upstream AI vendors the picker knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelProvider {
    /// `OpenAI`
    OpenAI,
    /// Azure `OpenAI` service
    Azure,
    /// Google (Gemini)
    Google,
    /// Anthropic (Claude)
    Anthropic,
    /// Baidu (Wenxin)
    Baidu,
    /// `ByteDance` (Doubao)
    ByteDance,
    /// Alibaba (Qwen)
    Alibaba,
    /// Tencent (Hunyuan)
    Tencent,
    /// Moonshot
    Moonshot,
    /// Stability AI
    Stability,
    /// Iflytek (Spark)
    Iflytek,
    /// `xAI` (Grok)
    Xai,
    /// `ChatGLM`
    ChatGLM,
}

impl ModelProvider {
    /// All known providers, in display order.
    pub const ALL: &'static [Self] = &[
        Self::OpenAI,
        Self::Azure,
        Self::Google,
        Self::Anthropic,
        Self::Baidu,
        Self::ByteDance,
        Self::Alibaba,
        Self::Tencent,
        Self::Moonshot,
        Self::Stability,
        Self::Iflytek,
        Self::Xai,
        Self::ChatGLM,
    ];

    /// Provider whose icon stands in for absent or unrecognised identifiers.
    pub const FALLBACK: Self = Self::OpenAI;

    /// Identifier as it appears in `providerName` fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenAI => "OpenAI",
            Self::Azure => "Azure",
            Self::Google => "Google",
            Self::Anthropic => "Anthropic",
            Self::Baidu => "Baidu",
            Self::ByteDance => "ByteDance",
            Self::Alibaba => "Alibaba",
            Self::Tencent => "Tencent",
            Self::Moonshot => "Moonshot",
            Self::Stability => "Stability",
            Self::Iflytek => "Iflytek",
            Self::Xai => "XAI",
            Self::ChatGLM => "ChatGLM",
        }
    }

    /// The icon drawn for this provider. Azure shares the `OpenAI` icon.
    #[must_use]
    pub const fn icon(self) -> Icon {
        match self {
            Self::OpenAI | Self::Azure => Icon::new("◎", Color::Rgb(16, 163, 127)),
            Self::Google => Icon::new("✦", Color::Rgb(66, 133, 244)),
            Self::Anthropic => Icon::new("✻", Color::Rgb(217, 119, 87)),
            Self::Baidu => Icon::new("❀", Color::Rgb(36, 107, 255)),
            Self::ByteDance => Icon::new("◐", Color::Rgb(51, 112, 255)),
            Self::Alibaba => Icon::new("◇", Color::Rgb(97, 92, 237)),
            Self::Tencent => Icon::new("◍", Color::Rgb(0, 82, 217)),
            Self::Moonshot => Icon::new("☾", Color::Rgb(180, 180, 200)),
            Self::Stability => Icon::new("▲", Color::Rgb(157, 78, 221)),
            Self::Iflytek => Icon::new("✧", Color::Rgb(0, 140, 255)),
            Self::Xai => Icon::new("✕", Color::Rgb(220, 220, 230)),
            Self::ChatGLM => Icon::new("◈", Color::Rgb(52, 100, 235)),
        }
    }

    /// Look up a provider by its exact identifier.
    ///
    /// Case and surrounding whitespace matter; anything else is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == value)
    }
}

const FALLBACK_ICON: Icon = ModelProvider::FALLBACK.icon();

/// A single avatar glyph with its accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    /// Glyph drawn in the terminal cell.
    pub glyph: &'static str,
    /// Foreground colour of the glyph.
    pub color: Color,
}

impl Icon {
    /// Create an icon.
    #[must_use]
    pub const fn new(glyph: &'static str, color: Color) -> Self {
        Self { glyph, color }
    }
}

/// Map an optional provider to its icon, falling back to [`ModelProvider::FALLBACK`].
#[must_use]
pub fn icon_for(provider: Option<ModelProvider>) -> Icon {
    provider.map_or(FALLBACK_ICON, ModelProvider::icon)
}

/// Map an optional provider identifier to its icon.
///
/// Unknown identifiers are not an error; they get the fallback icon.
#[must_use]
pub fn icon_for_id(id: Option<&str>) -> Icon {
    icon_for(id.and_then(ModelProvider::parse))
}

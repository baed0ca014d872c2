//! Route and step values returned by a directions provider.

/// Line metadata for a step travelled on public transport.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitLine {
    /// Short line name such as `"E"`.
    pub short_name: Option<String>,
    /// Full line name such as `"Aeroporto - Estádio do Dragão"`.
    pub name: Option<String>,
    /// Vehicle kind such as `"Metro"` or `"Bus"`.
    pub vehicle: Option<String>,
}

impl TransitLine {
    /// Short name if present, otherwise the full name.
    pub fn display_name(&self) -> Option<&str> {
        self.short_name.as_deref().or(self.name.as_deref())
    }
}

/// One instruction of a route.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStep {
    /// Pre-formatted instructions, possibly containing HTML markup.
    pub instructions: String,
    /// Duration as displayed by the provider, for example `"23 mins"`.
    pub duration_text: String,
    pub transit: Option<TransitLine>,
}

impl RouteStep {
    pub fn new(instructions: impl Into<String>, duration_text: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into(),
            duration_text: duration_text.into(),
            transit: None,
        }
    }

    #[must_use]
    pub fn with_transit(mut self, transit: TransitLine) -> Self {
        self.transit = Some(transit);
        self
    }

    /// Instructions with markup removed and common entities decoded.
    ///
    /// # Examples
    /// ```
    /// use porto_core::RouteStep;
    ///
    /// let step = RouteStep::new("Walk to <b>Aeroporto</b>&nbsp;&amp; board", "2 mins");
    /// assert_eq!(step.plain_instructions(), "Walk to Aeroporto & board");
    /// ```
    pub fn plain_instructions(&self) -> String {
        let mut text = String::with_capacity(self.instructions.len());
        let mut in_tag = false;
        for c in self.instructions.chars() {
            match c {
                '<' => {
                    in_tag = true;
                    text.push(' ');
                }
                '>' if in_tag => in_tag = false,
                _ if in_tag => {}
                _ => text.push(c),
            }
        }
        let decoded = decode_entities(&text);
        decoded.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

fn decode_entities(text: &str) -> String {
    // `&amp;` last so that `&amp;lt;` decodes to a literal `&lt;`.
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Ordered steps from origin to destination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitRoute {
    pub steps: Vec<RouteStep>,
}

impl TransitRoute {
    pub const fn new(steps: Vec<RouteStep>) -> Self {
        Self { steps }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Metro towards <b>Estádio do Dragão</b>", "Metro towards Estádio do Dragão")]
    #[case("Turn <b>left</b><div style=\"font-size:0.9em\">Destination on the right</div>", "Turn left Destination on the right")]
    #[case("Fish &amp;lt;chips&amp;gt;", "Fish &lt;chips&gt;")]
    #[case("Take &quot;E&quot; &#39;Aeroporto&#39;", "Take \"E\" 'Aeroporto'")]
    #[case("", "")]
    fn strips_markup_and_decodes_entities(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(RouteStep::new(raw, "1 min").plain_instructions(), expected);
    }

    #[rstest]
    fn display_name_prefers_short_name() {
        let line = TransitLine {
            short_name: Some("E".into()),
            name: Some("Aeroporto - Trindade".into()),
            vehicle: Some("Metro".into()),
        };
        assert_eq!(line.display_name(), Some("E"));
        let unnamed = TransitLine {
            short_name: None,
            ..line
        };
        assert_eq!(unnamed.display_name(), Some("Aeroporto - Trindade"));
    }
}

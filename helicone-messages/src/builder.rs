/// Fills `{name}` placeholders in a static template.
///
/// Placeholders without a matching variable are left untouched, which keeps
/// a missing substitution visible in the output instead of silently dropping it.
pub struct MessageBuilder {
    template: &'static str,
    vars: Vec<(&'static str, String)>,
}

impl MessageBuilder {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            vars: Vec::new(),
        }
    }

    pub fn var(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.vars.push((key, value.into()));
        self
    }

    pub fn build(self) -> String {
        let mut result = self.template.to_string();
        for (key, value) in &self.vars {
            result = result.replace(&format!("{{{key}}}"), value);
        }
        result
    }
}

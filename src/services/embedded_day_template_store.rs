use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{
    AppError, BUILD_FILE, DayFile, DayNumber, INPUT_EXAMPLE_FILE, INPUT_FILE, RESOURCE_FILE,
};
use crate::ports::DayTemplateStore;

/// Templates compiled into the binary.
mod day_templates {
    pub static SOURCE: &str = include_str!("../templates/day/source.cpp.j2");
    pub static BUILD: &str = include_str!("../templates/day/CMakeLists.txt.j2");
    pub static RESOURCES: &str = include_str!("../templates/day/resources.qrc");
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Day template store backed by embedded templates rendered with Minijinja.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedDayTemplateStore;

impl EmbeddedDayTemplateStore {
    pub fn new() -> Self {
        Self
    }

    /// Render a single template with `day` bound to the padded label.
    pub fn render(
        &self,
        template: &str,
        template_name: &str,
        day: DayNumber,
    ) -> Result<String, AppError> {
        if let Some(token) = disallowed_template_token(template) {
            return Err(template_render_error(
                template_name,
                format!("control syntax '{token}' is not allowed"),
            ));
        }

        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env.set_keep_trailing_newline(true);
            env
        });

        env.render_str(template, context! { day => day.label() })
            .map_err(|err| template_render_error(template_name, err))
    }
}

impl DayTemplateStore for EmbeddedDayTemplateStore {
    fn render_day(&self, day: DayNumber) -> Result<Vec<DayFile>, AppError> {
        let source_name = day.source_file_name();
        let source = self.render(day_templates::SOURCE, &source_name, day)?;
        let build = self.render(day_templates::BUILD, BUILD_FILE, day)?;

        Ok(vec![
            DayFile::placeholder(INPUT_FILE),
            DayFile::placeholder(INPUT_EXAMPLE_FILE),
            DayFile::text(source_name, source),
            DayFile::text(BUILD_FILE, build),
            // Static manifest, never rendered
            DayFile::text(RESOURCE_FILE, day_templates::RESOURCES),
        ])
    }
}

/// Templates only interpolate; block and comment syntax is rejected.
fn disallowed_template_token(template: &str) -> Option<&'static str> {
    if template.contains("{%") {
        return Some("{%");
    }
    if template.contains("{#") {
        return Some("{#");
    }
    None
}

fn template_render_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::TemplateRender { template: template_name.to_string(), reason: err.to_string() }
}

use std::fmt;

/// Dependency manager used to install a freshly created project.
///
/// Chosen from the template name: `python*` templates ship a
/// `requirements.txt`, everything else is a Node project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Installer {
    Pip,
    Npm,
}

impl fmt::Display for Installer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Installer::Pip => write!(f, "pip"),
            Installer::Npm => write!(f, "npm"),
        }
    }
}

impl Installer {
    pub fn for_template(template: &str) -> Self {
        if template.starts_with("python") {
            Installer::Pip
        } else {
            Installer::Npm
        }
    }

    pub fn program(&self) -> &'static str {
        match self {
            Installer::Pip => "pip",
            Installer::Npm => "npm",
        }
    }

    pub fn args(&self) -> &'static [&'static str] {
        match self {
            Installer::Pip => &["install", "-r", "requirements.txt"],
            Installer::Npm => &["install"],
        }
    }

    /// The install command as a user would type it.
    pub fn command_line(&self) -> String {
        format!("{} {}", self.program(), self.args().join(" "))
    }

    /// Example environment file shipped with templates of this kind.
    pub fn env_example(&self) -> &'static str {
        match self {
            Installer::Pip => "env.example",
            Installer::Npm => ".env.example",
        }
    }

    /// Command that starts the generated project in development mode.
    pub fn run_command(&self) -> &'static str {
        match self {
            Installer::Pip => "uvicorn app.main:app --reload",
            Installer::Npm => "npm run dev",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_prefix_selects_pip() {
        assert_eq!(Installer::for_template("python-fastapi"), Installer::Pip);
        assert_eq!(Installer::for_template("python"), Installer::Pip);
        assert_eq!(
            Installer::for_template("python-fastapi").command_line(),
            "pip install -r requirements.txt"
        );
    }

    #[test]
    fn test_everything_else_selects_npm() {
        for template in ["nextjs", "typescript-express", "", "fastapi-python"] {
            assert_eq!(Installer::for_template(template), Installer::Npm);
        }
        assert_eq!(Installer::Npm.command_line(), "npm install");
    }

    #[test]
    fn test_next_step_hints() {
        assert_eq!(Installer::Pip.env_example(), "env.example");
        assert_eq!(Installer::Npm.env_example(), ".env.example");
        assert_eq!(Installer::Pip.run_command(), "uvicorn app.main:app --reload");
        assert_eq!(Installer::Npm.run_command(), "npm run dev");
    }
}

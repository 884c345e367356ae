/// Options for content module generation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Data file named in the generated header
    pub source_name: String,
    /// Command named in the generated header for manual regeneration
    pub regenerate_command: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            source_name: "content.data.json".to_string(),
            regenerate_command: "dwd generate".to_string(),
        }
    }
}

/// Output buffer for code generation
pub struct CompilerContext {
    buffer: String,
    pub options: CompileOptions,
}

impl CompilerContext {
    pub fn new(options: CompileOptions) -> Self {
        Self {
            buffer: String::new(),
            options,
        }
    }

    pub fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn add_line(&mut self, text: &str) {
        self.add(text);
        self.add("\n");
    }

    pub fn get_output(self) -> String {
        self.buffer
    }
}

//! Simulated code extraction from a screenshot. No image is decoded: the
//! dialect is guessed from the file name and canned code is returned.

use crate::dialect::Dialect;
use serde::Serialize;

pub const EXTRACTION_CONFIDENCE: f64 = 0.92;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedCode {
    pub code: String,
    pub dialect: Dialect,
    pub confidence: f64,
}

pub fn extract_code_from_image(file_name: &str) -> ExtractedCode {
    let dialect = if file_name.contains(".py") {
        Dialect::Python
    } else if file_name.contains(".java") {
        Dialect::Java
    } else {
        Dialect::JavaScript
    };
    let code = match dialect {
        Dialect::Python => {
            "def hello_world():\n    print(\"Hello, World!\")\n\nif __name__ == \"__main__\":\n    hello_world()"
        }
        Dialect::Java => {
            "public class HelloWorld {\n    public static void main(String[] args) {\n        System.out.println(\"Hello, World!\");\n    }\n}"
        }
        Dialect::JavaScript | Dialect::TypeScript => {
            "function helloWorld() {\n    console.log(\"Hello, World!\");\n}\n\nhelloWorld();"
        }
    };
    ExtractedCode {
        code: code.to_string(),
        dialect,
        confidence: EXTRACTION_CONFIDENCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::assemble;

    #[test]
    fn test_dialect_from_file_name() {
        assert_eq!(extract_code_from_image("shot.py.png").dialect, Dialect::Python);
        assert_eq!(extract_code_from_image("Main.java.jpg").dialect, Dialect::Java);
        assert_eq!(extract_code_from_image("screen.png").dialect, Dialect::JavaScript);
    }

    #[test]
    fn test_extracted_code_runs_through_assembler() {
        for name in ["a.py.png", "a.java.png", "a.png"] {
            let x = extract_code_from_image(name);
            let out = assemble(&x.code, x.dialect.rules());
            assert_eq!(out.stdout(), "Hello, World!\n", "{name}");
            assert_eq!(x.confidence, 0.92);
        }
    }
}

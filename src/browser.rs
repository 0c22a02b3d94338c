//! The read-only subject/chapter browse screen. Static catalog data; not
//! wired to the quiz engine.

pub struct Chapter {
    pub id: &'static str,
    pub name: &'static str,
    pub questions: u32,
    pub completed: u32,
}

impl Chapter {
    pub fn progress_percent(&self) -> u32 {
        if self.questions == 0 {
            return 0;
        }
        (100.0 * self.completed as f64 / self.questions as f64).round() as u32
    }
}

pub struct Subject {
    pub id: &'static str,
    pub name: &'static str,
    pub chapters: Vec<Chapter>,
}

fn chapter(id: &'static str, name: &'static str, questions: u32, completed: u32) -> Chapter {
    Chapter {
        id,
        name,
        questions,
        completed,
    }
}

pub fn catalog() -> Vec<Subject> {
    vec![
        Subject {
            id: "algebra",
            name: "Algebra",
            chapters: vec![
                chapter("polynomials", "Polynomials", 45, 20),
                chapter("equations", "Linear Equations", 30, 15),
                chapter("matrices", "Matrices", 25, 8),
                chapter("complex-numbers", "Complex Numbers", 35, 12),
            ],
        },
        Subject {
            id: "trigonometry",
            name: "Trigonometry",
            chapters: vec![
                chapter("triangles", "Right Triangles", 40, 18),
                chapter("identities", "Trig Identities", 50, 22),
                chapter("graphs", "Trig Graphs", 35, 10),
            ],
        },
        Subject {
            id: "calculus",
            name: "Calculus",
            chapters: vec![
                chapter("limits", "Limits", 30, 12),
                chapter("derivatives", "Derivatives", 55, 25),
                chapter("integration", "Integration", 60, 20),
                chapter("sequences-and-series", "Sequences and Series", 45, 15),
            ],
        },
        Subject {
            id: "analytical-geometry",
            name: "Analytical Geometry",
            chapters: vec![
                chapter("coordinate", "Coordinate Geometry", 40, 18),
                chapter("vectors", "Vectors", 35, 12),
                chapter("conics", "Conic Sections", 50, 20),
            ],
        },
    ]
}

/// Cursor over the catalog: which subject is open and which of its chapters
/// is highlighted. Movement clamps at the edges.
pub struct BrowserState {
    subjects: Vec<Subject>,
    subject: usize,
    chapter: usize,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserState {
    pub fn new() -> Self {
        Self {
            subjects: catalog(),
            subject: 0,
            chapter: 0,
        }
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn subject_index(&self) -> usize {
        self.subject
    }

    pub fn chapter_index(&self) -> usize {
        self.chapter
    }

    pub fn active_subject(&self) -> &Subject {
        &self.subjects[self.subject]
    }

    pub fn active_chapter(&self) -> &Chapter {
        &self.active_subject().chapters[self.chapter]
    }

    pub fn next_subject(&mut self) {
        if self.subject + 1 < self.subjects.len() {
            self.subject += 1;
            self.chapter = 0;
        }
    }

    pub fn prev_subject(&mut self) {
        if self.subject > 0 {
            self.subject -= 1;
            self.chapter = 0;
        }
    }

    pub fn next_chapter(&mut self) {
        if self.chapter + 1 < self.active_subject().chapters.len() {
            self.chapter += 1;
        }
    }

    pub fn prev_chapter(&mut self) {
        if self.chapter > 0 {
            self.chapter -= 1;
        }
    }
}

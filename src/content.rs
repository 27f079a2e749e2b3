//! Static copy shown in the section overlays.

use crate::sections::SectionId;

pub struct Item {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Work {
    pub title: &'static str,
    pub year: &'static str,
    pub summary: &'static str,
    pub tech_stack: &'static [&'static str],
}

pub struct Statement {
    pub number: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperimentKind {
    WebGl,
    Shader,
    Physics,
}

impl ExperimentKind {
    pub fn label(self) -> &'static str {
        match self {
            ExperimentKind::WebGl => "webgl",
            ExperimentKind::Shader => "shader",
            ExperimentKind::Physics => "physics",
        }
    }
}

pub struct Experiment {
    pub title: &'static str,
    pub description: &'static str,
    pub kind: ExperimentKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookCategory {
    Philosophy,
    Manga,
    Psychology,
}

impl BookCategory {
    pub const ALL: [BookCategory; 3] = [
        BookCategory::Philosophy,
        BookCategory::Manga,
        BookCategory::Psychology,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BookCategory::Philosophy => "Philosophy",
            BookCategory::Manga => "Manga",
            BookCategory::Psychology => "Psychology",
        }
    }
}

/// Highest reality rating a book can carry.
pub const MAX_REALITY_RATING: u8 = 10;

pub struct Book {
    pub title: &'static str,
    pub author: &'static str,
    pub genre: &'static str,
    pub summary: &'static str,
    pub core_idea: &'static str,
    /// Out of [`MAX_REALITY_RATING`].
    pub reality_rating: u8,
    pub category: BookCategory,
}

pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

/// Everything one overlay renders. Unused lists are empty.
pub struct SectionContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub hero_title: Option<&'static str>,
    pub hero_subtitle: Option<&'static str>,
    pub description: &'static str,
    pub items: &'static [Item],
    pub works: &'static [Work],
    pub statements: &'static [Statement],
    pub experiments: &'static [Experiment],
    pub books: &'static [Book],
    pub quote: Option<Quote>,
}

impl SectionContent {
    /// Description split on blank lines.
    pub fn paragraphs(&self) -> impl Iterator<Item = &'static str> {
        self.description
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    pub fn books_in(&self, category: BookCategory) -> impl Iterator<Item = &'static Book> {
        self.books
            .iter()
            .filter(move |book| book.category == category)
    }
}

pub fn lookup(section: SectionId) -> &'static SectionContent {
    match section {
        SectionId::About => &ABOUT,
        SectionId::Works => &WORKS,
        SectionId::Philosophy => &PHILOSOPHY,
        SectionId::Experiments => &EXPERIMENTS,
        SectionId::Contact => &CONTACT,
    }
}

static ABOUT: SectionContent = SectionContent {
    title: "About",
    subtitle: "The Observer",
    hero_title: Some("The Observer Behind the Eye"),
    hero_subtitle: Some("A study in perception, creation, and systems."),
    description: "I am a student of both code and art, on a mission to bring digital visions to \
life. My world is a vibrant fusion of logic and creativity: I thrive on the \
challenge of full-stack development, building unique projects from the ground \
up, and find inspiration in the art of storytelling through photography and \
filmmaking. This blend of skills allows me to craft digital experiences that are \
not just functional, but also beautiful and memorable. Every project is a chance \
for me to learn and grow, pushing the boundaries of what's possible with \
technology and creativity.\n\n\
At Mohit Creations, I bring ideas to life through a range of services: branding, \
web development, agency solutions, content creation, SaaS, and motion & 3D \
modeling. As a web designer, you merge artistry and technology to craft \"digital \
experiences\" that inform, captivate, and inspire. Every day brings something new \
— one moment you're sketching innovative concepts, the next you're turning them \
into seamless, responsive designs. Web design keeps you pushing boundaries and \
creating at every turn!",
    items: &[
        Item {
            title: "45+",
            description: "Presence in global markets - Expanding reach across international regions with \
localized expertise and worldwide impact.",
        },
        Item {
            title: "15M",
            description: "In strategic investments - Driving growth with curated partnerships and \
high-performing, audience-driven initiatives.",
        },
        Item {
            title: "158+",
            description: "Trusted brand collaborations - Shaping industry conversations through \
innovation, creativity, and lasting influence.",
        },
    ],
    works: &[],
    statements: &[],
    experiments: &[],
    books: &[],
    quote: None,
};

static WORKS: SectionContent = SectionContent {
    title: "Works",
    subtitle: "Selected Projects",
    hero_title: None,
    hero_subtitle: None,
    description: "A curated archive of digital experiences, each crafted to expand the boundaries \
of perception and connect technology with human emotion.",
    items: &[],
    works: &[
        Work {
            title: "Nebula Dreams",
            year: "2025",
            summary: "An immersive journey through procedurally generated cosmic landscapes, where \
sound shapes reality and movement creates meaning. A full-stack exploration of \
generative aesthetics and interactive storytelling.",
            tech_stack: &["Three.js", "WebGL", "Web Audio API", "GLSL"],
        },
        Work {
            title: "Echo Chamber",
            year: "2024",
            summary: "Audio-reactive installation exploring the resonance between human voice and \
digital response. Developed from initial concept through deployment, featuring \
real-time audio analysis and adaptive visual responses.",
            tech_stack: &["React", "Tone.js", "Canvas API", "Machine Learning"],
        },
        Work {
            title: "Data Sculpture",
            year: "2024",
            summary: "Transforming live financial data streams into organic, breathing architectural \
forms. Built end-to-end with backend infrastructure for real-time data ingestion \
and WebSocket streaming.",
            tech_stack: &["D3.js", "Three.js", "WebSocket", "Node.js"],
        },
        Work {
            title: "Perception Engine",
            year: "2023",
            summary: "Real-time eye-tracking experience that adapts its visual complexity based on \
viewer attention. A study in human-computer interaction and adaptive interface \
design.",
            tech_stack: &["TensorFlow.js", "WebGL", "Computer Vision"],
        },
        Work {
            title: "Neural Garden",
            year: "2023",
            summary: "Generative ecosystem where artificial life forms evolve based on collective user \
interaction. Showcasing emergent behavior and the beauty of systems that learn \
and adapt.",
            tech_stack: &["Neural Networks", "Genetic Algorithms", "Canvas"],
        },
        Work {
            title: "Temporal Drift",
            year: "2022",
            summary: "Time-based installation capturing and visualizing the passage of moments in an \
ever-shifting landscape. A meditation on impermanence and the beauty of \
transient digital experiences.",
            tech_stack: &["GLSL Shaders", "Three.js", "FFmpeg"],
        },
    ],
    statements: &[],
    experiments: &[],
    books: &[],
    quote: None,
};

static PHILOSOPHY: SectionContent = SectionContent {
    title: "Philosophy",
    subtitle: "Principles of Construction",
    hero_title: None,
    hero_subtitle: None,
    description: "The foundational beliefs that guide every creative decision.",
    items: &[],
    works: &[],
    statements: &[
        Statement {
            number: "01",
            title: "Constraint Breeds Creativity",
            body: "Limitations are not obstacles but invitations. Within boundaries, innovation \
flourishes. The canvas edge teaches the brush where to dance.",
        },
        Statement {
            number: "02",
            title: "Every Pixel is Intentional",
            body: "There is no accident in craft. Each element exists because it must. Noise is \
merely signal we have not yet understood.",
        },
        Statement {
            number: "03",
            title: "Technology Serves Emotion",
            body: "Code is poetry written for machines that speaks to hearts. The most \
sophisticated algorithm means nothing if it cannot move the soul.",
        },
        Statement {
            number: "04",
            title: "Simplicity is the Ultimate Sophistication",
            body: "To reduce is to reveal. Strip away the unnecessary until only essence remains. \
True complexity hides within apparent simplicity.",
        },
        Statement {
            number: "05",
            title: "The User is a Collaborator",
            body: "Every interaction completes the work. The observer is never passive. Meaning \
emerges from the space between creator and witness.",
        },
        Statement {
            number: "06",
            title: "Embrace the Impermanent",
            body: "Digital work exists in flux. Code decays, platforms evolve, browsers forget. \
Create not for permanence but for the present moment.",
        },
        Statement {
            number: "07",
            title: "Beauty Requires Courage",
            body: "To pursue aesthetic excellence is to risk failure visibly. The commitment to \
craft demands vulnerability. Create boldly.",
        },
    ],
    experiments: &[],
    books: BOOKS,
    quote: Some(Quote {
        text: "We do not see things as they are, we see them as we are.",
        author: "Anaïs Nin",
    }),
};

static EXPERIMENTS: SectionContent = SectionContent {
    title: "Experiments",
    subtitle: "The Laboratory",
    hero_title: None,
    hero_subtitle: None,
    description: "Ongoing explorations in code, physics, and perception. Works in progress. \
Failures welcomed.",
    items: &[],
    works: &[],
    statements: &[],
    experiments: &[
        Experiment {
            title: "Fluid Dynamics",
            description: "Real-time Navier-Stokes simulation with interactive perturbation.",
            kind: ExperimentKind::Physics,
        },
        Experiment {
            title: "Ray Marcher",
            description: "Distance field rendering of impossible geometric forms.",
            kind: ExperimentKind::Shader,
        },
        Experiment {
            title: "Particle Life",
            description: "Emergent behavior from simple attraction/repulsion rules.",
            kind: ExperimentKind::Physics,
        },
        Experiment {
            title: "Noise Fields",
            description: "Flowing vector fields driven by layered simplex noise.",
            kind: ExperimentKind::WebGl,
        },
        Experiment {
            title: "Reaction Diffusion",
            description: "Gray-Scott model producing organic pattern formation.",
            kind: ExperimentKind::Shader,
        },
        Experiment {
            title: "Cloth Simulation",
            description: "Verlet integration for realistic fabric behavior.",
            kind: ExperimentKind::Physics,
        },
    ],
    books: &[],
    quote: None,
};

static CONTACT: SectionContent = SectionContent {
    title: "Contact",
    subtitle: "Initiate Contact",
    hero_title: None,
    hero_subtitle: None,
    description: "For collaborations, commissions, or conversations.",
    items: &[
        Item {
            title: "Twitter",
            description: "@almondgod",
        },
        Item {
            title: "GitHub",
            description: "github.com/almondgod",
        },
        Item {
            title: "LinkedIn",
            description: "linkedin.com/in/almondgod",
        },
    ],
    works: &[],
    statements: &[],
    experiments: &[],
    books: &[],
    quote: None,
};

const BOOKS: &[Book] = &[
    Book {
        title: "All the Troubles of the World",
        author: "Isaac Asimov",
        genre: "Science Fiction",
        summary: "A thought-provoking exploration of AI and humanity's relationship with technology.",
        core_idea: "Technology reflects our own nature; true wisdom comes from within.",
        reality_rating: 9,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Battlestar Galactica",
        author: "Glen A. Larson",
        genre: "Science Fiction",
        summary: "Epic space opera exploring survival, identity, and what it means to be human.",
        core_idea: "The cycle of conflict between creators and creations; humanity's search for home.",
        reality_rating: 8,
        category: BookCategory::Manga,
    },
    Book {
        title: "The Beginning of Infinity",
        author: "David Deutsch",
        genre: "Philosophy of Science",
        summary: "Exploration of human knowledge, progress, and the infinite potential of understanding.",
        core_idea: "All problems are solvable with the right knowledge; progress has no limits.",
        reality_rating: 10,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Benjamin Franklin",
        author: "Walter Isaacson",
        genre: "Biography",
        summary: "The life of America's most versatile founding father and polymath.",
        core_idea: "Curiosity and practical wisdom can change the world.",
        reality_rating: 9,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Berserk",
        author: "Kentaro Miura",
        genre: "Dark Fantasy Manga",
        summary: "Dark fantasy epic exploring fate, free will, and the human struggle against destiny.",
        core_idea: "True strength is forged through suffering; we define our own fate.",
        reality_rating: 10,
        category: BookCategory::Manga,
    },
    Book {
        title: "The Blood of Olympus",
        author: "Rick Riordan",
        genre: "Fantasy",
        summary: "Mythological adventure exploring heroism and the power of unity.",
        core_idea: "True heroism comes from sacrifice and working together.",
        reality_rating: 8,
        category: BookCategory::Manga,
    },
    Book {
        title: "Bone",
        author: "Jeff Smith",
        genre: "Fantasy Comic",
        summary: "Epic fantasy adventure with humor and heart.",
        core_idea: "Courage and friendship can overcome the darkest evil.",
        reality_rating: 8,
        category: BookCategory::Manga,
    },
    Book {
        title: "The 13½ Lives of Captain Bluebear",
        author: "Walter Moers",
        genre: "Fantasy",
        summary: "Whimsical adventure through a world of imagination and wonder.",
        core_idea: "Life is an endless adventure of learning and transformation.",
        reality_rating: 8,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Childhood's End",
        author: "Arthur C. Clarke",
        genre: "Science Fiction",
        summary: "Humanity's transcendence under the guidance of mysterious alien Overlords.",
        core_idea: "Evolution may lead us beyond our current form of consciousness.",
        reality_rating: 10,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Crystal Nights",
        author: "Greg Egan",
        genre: "Science Fiction",
        summary: "Exploration of simulated consciousness and the ethics of creating intelligent life.",
        core_idea: "What responsibilities do creators have to their creations?",
        reality_rating: 9,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Death's End",
        author: "Liu Cixin",
        genre: "Science Fiction",
        summary: "Epic conclusion to the Three-Body Problem trilogy, spanning eons.",
        core_idea: "The universe is a dark forest; survival requires difficult choices.",
        reality_rating: 10,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Dune",
        author: "Frank Herbert",
        genre: "Science Fiction",
        summary: "Epic tale of politics, religion, and ecology on a desert planet.",
        core_idea: "He who controls the spice controls the universe; prescience is a trap.",
        reality_rating: 10,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Eldest",
        author: "Christopher Paolini",
        genre: "Fantasy",
        summary: "Continuation of the Inheritance Cycle, exploring magic and destiny.",
        core_idea: "True power comes from knowledge and self-mastery.",
        reality_rating: 8,
        category: BookCategory::Manga,
    },
    Book {
        title: "Elon Musk",
        author: "Ashlee Vance",
        genre: "Biography",
        summary: "The story of one of the most ambitious entrepreneurs of our time.",
        core_idea: "Ambitious goals and relentless execution can change humanity's future.",
        reality_rating: 9,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Enchiridion",
        author: "Epictetus",
        genre: "Stoicism",
        summary: "Practical manual for living a virtuous life through Stoic principles.",
        core_idea: "Focus only on what you can control; accept what you cannot.",
        reality_rating: 10,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Eragon",
        author: "Christopher Paolini",
        genre: "Fantasy",
        summary: "A farm boy discovers his destiny as the last Dragon Rider.",
        core_idea: "Great power brings great responsibility; choose your path wisely.",
        reality_rating: 8,
        category: BookCategory::Manga,
    },
    Book {
        title: "Feeling is the Secret",
        author: "Neville Goddard",
        genre: "Metaphysics",
        summary: "The power of imagination and feeling in creating reality.",
        core_idea: "Your subconscious mind creates your reality through feeling.",
        reality_rating: 9,
        category: BookCategory::Psychology,
    },
    Book {
        title: "Foundation",
        author: "Isaac Asimov",
        genre: "Science Fiction",
        summary: "The fall of a galactic empire and the preservation of knowledge.",
        core_idea: "History follows patterns; knowledge is civilization's greatest treasure.",
        reality_rating: 10,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "The Gallic Wars",
        author: "Julius Caesar",
        genre: "History",
        summary: "Caesar's own account of his military campaigns in Gaul.",
        core_idea: "Strategy, leadership, and determination shape history.",
        reality_rating: 9,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Goddesses in Everywoman",
        author: "Jean Shinoda Bolen",
        genre: "Psychology",
        summary: "Jungian archetypes of the feminine psyche through Greek goddesses.",
        core_idea: "Understanding your inner archetypes leads to self-knowledge.",
        reality_rating: 8,
        category: BookCategory::Psychology,
    },
    Book {
        title: "Grendel",
        author: "John Gardner",
        genre: "Literary Fiction",
        summary: "Beowulf retold from the monster's perspective.",
        core_idea: "Meaning is what we create in an indifferent universe.",
        reality_rating: 9,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Hillbilly Elegy",
        author: "J.D. Vance",
        genre: "Memoir",
        summary: "A personal account of growing up in Appalachian America.",
        core_idea: "Culture and family shape our destiny, but we can transcend them.",
        reality_rating: 8,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "The Hitchhiker's Guide to the Galaxy",
        author: "Douglas Adams",
        genre: "Science Fiction Comedy",
        summary: "Absurdist cosmic adventure seeking the meaning of life.",
        core_idea: "Don't panic; the universe is stranger and funnier than we imagine.",
        reality_rating: 9,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Incerto (Antifragile)",
        author: "Nassim Nicholas Taleb",
        genre: "Philosophy",
        summary: "How to thrive in a world of uncertainty and randomness.",
        core_idea: "Antifragility: some things benefit from shocks and volatility.",
        reality_rating: 10,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "I, Robot",
        author: "Isaac Asimov",
        genre: "Science Fiction",
        summary: "Stories exploring the relationship between humans and robots.",
        core_idea: "The Three Laws of Robotics and their unexpected consequences.",
        reality_rating: 9,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "July and Everything After",
        author: "Various",
        genre: "Literary Fiction",
        summary: "A journey through time and memory.",
        core_idea: "Every moment contains the seeds of transformation.",
        reality_rating: 8,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "King, Warrior, Magician, Lover",
        author: "Robert Moore",
        genre: "Psychology",
        summary: "Jungian archetypes of mature masculinity.",
        core_idea: "Access the four archetypes to become a fully realized man.",
        reality_rating: 9,
        category: BookCategory::Psychology,
    },
    Book {
        title: "The Kybalion",
        author: "Three Initiates",
        genre: "Hermetic Philosophy",
        summary: "Seven principles of Hermetic philosophy from ancient Egypt.",
        core_idea: "As above, so below; the universe operates by mental laws.",
        reality_rating: 9,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Lessons of History",
        author: "Will & Ariel Durant",
        genre: "History/Philosophy",
        summary: "Distilled wisdom from the Durants' lifetime study of civilization.",
        core_idea: "History reveals patterns; human nature remains constant.",
        reality_rating: 10,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Mandukya Upanishad",
        author: "Ancient Sages",
        genre: "Hindu Philosophy",
        summary: "The nature of consciousness through the analysis of OM.",
        core_idea: "Reality has four states; pure consciousness underlies all.",
        reality_rating: 10,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Man's Search for Meaning",
        author: "Viktor Frankl",
        genre: "Psychology",
        summary: "Finding purpose through suffering in Nazi concentration camps.",
        core_idea: "Those who have a why can bear almost any how.",
        reality_rating: 10,
        category: BookCategory::Psychology,
    },
    Book {
        title: "Memories, Dreams, Reflections",
        author: "Carl Jung",
        genre: "Psychology/Autobiography",
        summary: "Jung's personal journey into the depths of the psyche.",
        core_idea: "The unconscious holds the keys to self-knowledge.",
        reality_rating: 10,
        category: BookCategory::Psychology,
    },
    Book {
        title: "Mossflower",
        author: "Brian Jacques",
        genre: "Fantasy",
        summary: "Epic tale of woodland creatures fighting for freedom.",
        core_idea: "Courage and friendship can overthrow tyranny.",
        reality_rating: 8,
        category: BookCategory::Manga,
    },
    Book {
        title: "The Almanack of Naval Ravikant",
        author: "Eric Jorgenson",
        genre: "Philosophy/Business",
        summary: "Wisdom on wealth and happiness from Naval Ravikant.",
        core_idea: "Seek wealth through leverage and specific knowledge; happiness is a skill.",
        reality_rating: 9,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "The Once and Future King",
        author: "T.H. White",
        genre: "Fantasy",
        summary: "The legendary story of King Arthur and his knights.",
        core_idea: "Might must be used for right; power corrupts.",
        reality_rating: 9,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "On Intelligence",
        author: "Jeff Hawkins",
        genre: "Neuroscience",
        summary: "A new framework for understanding how the brain works.",
        core_idea: "Intelligence is prediction based on hierarchical memory.",
        reality_rating: 9,
        category: BookCategory::Psychology,
    },
    Book {
        title: "Permutation City",
        author: "Greg Egan",
        genre: "Science Fiction",
        summary: "Exploration of consciousness in simulated realities.",
        core_idea: "What is real if consciousness can exist in any substrate?",
        reality_rating: 10,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "The Power of Awareness",
        author: "Neville Goddard",
        genre: "Metaphysics",
        summary: "Consciousness as the creator of reality.",
        core_idea: "Assume the feeling of your wish fulfilled.",
        reality_rating: 9,
        category: BookCategory::Psychology,
    },
    Book {
        title: "The Red Book",
        author: "Carl Jung",
        genre: "Psychology",
        summary: "Jung's personal confrontation with the unconscious.",
        core_idea: "The journey inward reveals the depths of the psyche.",
        reality_rating: 10,
        category: BookCategory::Psychology,
    },
    Book {
        title: "Redwall",
        author: "Brian Jacques",
        genre: "Fantasy",
        summary: "Epic tale of mice defending their abbey from invasion.",
        core_idea: "Honor, courage, and community can overcome any evil.",
        reality_rating: 8,
        category: BookCategory::Manga,
    },
    Book {
        title: "Rockefeller's 38 Letters",
        author: "John D. Rockefeller",
        genre: "Business/Biography",
        summary: "Letters of wisdom from one of history's richest men.",
        core_idea: "Discipline, vision, and patience build empires.",
        reality_rating: 9,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Rumo",
        author: "Walter Moers",
        genre: "Fantasy",
        summary: "A young Wolperting's epic adventure in Zamonia.",
        core_idea: "True courage is following your heart despite fear.",
        reality_rating: 8,
        category: BookCategory::Manga,
    },
    Book {
        title: "Scaling Era",
        author: "Various",
        genre: "Technology",
        summary: "The age of exponential technological growth.",
        core_idea: "Technology scales; understanding this changes everything.",
        reality_rating: 9,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Shoe Dog",
        author: "Phil Knight",
        genre: "Memoir/Business",
        summary: "The creation of Nike by its founder.",
        core_idea: "Passion and persistence can build empires.",
        reality_rating: 9,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "The Startup of You",
        author: "Reid Hoffman",
        genre: "Business",
        summary: "Treating your career like a startup.",
        core_idea: "Invest in yourself; adapt and evolve constantly.",
        reality_rating: 8,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Steve Jobs",
        author: "Walter Isaacson",
        genre: "Biography",
        summary: "The life of Apple's visionary founder.",
        core_idea: "Reality distortion and taste can change the world.",
        reality_rating: 10,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Tantra Illuminated",
        author: "Christopher Wallis",
        genre: "Eastern Philosophy",
        summary: "Comprehensive guide to the philosophy of Tantra.",
        core_idea: "Reality is the play of divine consciousness.",
        reality_rating: 10,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "The Last Question",
        author: "Isaac Asimov",
        genre: "Science Fiction",
        summary: "Humanity's quest to reverse entropy across eons.",
        core_idea: "The ultimate fate of the universe and consciousness.",
        reality_rating: 10,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "The Trial",
        author: "Franz Kafka",
        genre: "Literary Fiction",
        summary: "A man arrested for an unknown crime in an absurd world.",
        core_idea: "Bureaucracy and guilt in an incomprehensible system.",
        reality_rating: 9,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "The Three-Body Problem",
        author: "Liu Cixin",
        genre: "Science Fiction",
        summary: "First contact during China's Cultural Revolution.",
        core_idea: "The universe may be more hostile than we imagine.",
        reality_rating: 10,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Tuck Everlasting",
        author: "Natalie Babbitt",
        genre: "Fantasy",
        summary: "A family cursed with immortality and a girl who discovers their secret.",
        core_idea: "Life's meaning comes from its finite nature.",
        reality_rating: 8,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Vagabond",
        author: "Takehiko Inoue",
        genre: "Historical Manga",
        summary: "The life of legendary swordsman Miyamoto Musashi.",
        core_idea: "The way of the sword is the way of self-mastery.",
        reality_rating: 10,
        category: BookCategory::Manga,
    },
    Book {
        title: "The Vital Question",
        author: "Nick Lane",
        genre: "Science",
        summary: "The deep origins of life and energy.",
        core_idea: "Life's complexity arose from energy constraints.",
        reality_rating: 9,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "The War of Art",
        author: "Steven Pressfield",
        genre: "Self-Help",
        summary: "Overcoming creative resistance.",
        core_idea: "Resistance is the enemy; turning pro defeats it.",
        reality_rating: 9,
        category: BookCategory::Psychology,
    },
    Book {
        title: "What Has Government Done to Our Money?",
        author: "Murray Rothbard",
        genre: "Economics",
        summary: "Critique of government monetary policy.",
        core_idea: "Sound money requires freedom from government control.",
        reality_rating: 8,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "When Breath Becomes Air",
        author: "Paul Kalanithi",
        genre: "Memoir",
        summary: "A neurosurgeon's confrontation with mortality.",
        core_idea: "Meaning is found in the face of death.",
        reality_rating: 10,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Why Greatness Cannot Be Planned",
        author: "Kenneth Stanley",
        genre: "Science/Philosophy",
        summary: "The myth of the objective and the power of novelty search.",
        core_idea: "True innovation comes from exploring, not planning.",
        reality_rating: 9,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "The Wind in the Willows",
        author: "Kenneth Grahame",
        genre: "Classic Fiction",
        summary: "Adventures of Mole, Rat, Toad, and Badger along the river.",
        core_idea: "Friendship, home, and simple pleasures are life's treasures.",
        reality_rating: 8,
        category: BookCategory::Philosophy,
    },
    Book {
        title: "Zero to One",
        author: "Peter Thiel",
        genre: "Business",
        summary: "Creating something new rather than copying what exists.",
        core_idea: "True progress is going from zero to one, not one to many.",
        reality_rating: 9,
        category: BookCategory::Philosophy,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_content_titled_after_it() {
        for section in SectionId::ALL {
            assert_eq!(lookup(section).title, section.title());
        }
    }

    #[test]
    fn about_splits_into_paragraphs() {
        let paragraphs: Vec<_> = lookup(SectionId::About).paragraphs().collect();
        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs[0].starts_with("I am a student"));
        assert!(paragraphs[1].starts_with("At Mohit Creations"));
    }

    #[test]
    fn philosophy_statements_are_numbered_in_order() {
        let statements = lookup(SectionId::Philosophy).statements;
        for (i, statement) in statements.iter().enumerate() {
            assert_eq!(statement.number, format!("{:02}", i + 1));
        }
        assert!(lookup(SectionId::Philosophy).quote.is_some());
    }

    #[test]
    fn philosophy_carries_the_book_collection() {
        let philosophy = lookup(SectionId::Philosophy);
        assert_eq!(philosophy.books.len(), 59);
        for book in philosophy.books {
            assert!(!book.title.is_empty() && !book.author.is_empty());
            assert!((1..=MAX_REALITY_RATING).contains(&book.reality_rating));
        }
        let grouped: usize = BookCategory::ALL
            .into_iter()
            .map(|category| philosophy.books_in(category).count())
            .sum();
        assert_eq!(grouped, philosophy.books.len());
        assert!(philosophy.books_in(BookCategory::Manga).any(|b| b.title == "Berserk"));
    }

    #[test]
    fn only_philosophy_lists_books() {
        for section in SectionId::ALL {
            if section != SectionId::Philosophy {
                assert!(lookup(section).books.is_empty());
            }
        }
    }
}

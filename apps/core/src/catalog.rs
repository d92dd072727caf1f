//! Compiled-in campus catalog.
//!
//! Static data that ships with the crate: the fest event list, the academic
//! programs, institute facts, and a fallback faculty roster used when the
//! faculty source could not be loaded. None of this is mutated at runtime.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::models::{EventCategory, EventRecord, FacultyRecord, InstituteInfo, Program, ProgramKind};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn info(pairs: &[(&str, &str)]) -> Option<BTreeMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

static EVENTS: LazyLock<Vec<EventRecord>> = LazyLock::new(|| {
    vec![
        EventRecord {
            id: "figma-forge".into(),
            name: "Figma Forge".into(),
            category: EventCategory::Technical,
            synopsis: "Participants are given a problem statement. Within a limited time, they create wireframes, UI screens, or prototypes using Figma. Designs are judged on creativity, usability, layout, color scheme, and user experience.".into(),
            team_size: "Individual".into(),
            fee: "₹70".into(),
            ai_allowed: false,
            individual: true,
            judging_criteria: strings(&["Creativity & Innovation", "UI Design (Visual Appeal)", "User Experience (UX)", "Problem Understanding", "Functionality & Layout", "Time Management", "Overall Presentation"]),
            rules: strings(&["All work must be original", "Use of third-party assets allowed if properly licensed", "Copying from existing designs → disqualification", "AI-generated content is prohibited", "Must submit before deadline", "No pre-made templates"]),
            contact_person: Some("Neha Bhanushali".into()),
            contact_phone: Some("9408810123".into()),
            additional_info: None,
        },
        EventRecord {
            id: "chatbot".into(),
            name: "Chatbot Challenge".into(),
            category: EventCategory::Technical,
            synopsis: "Participants build a chatbot using programming languages, frameworks, or no-code platforms that can understand user queries and respond intelligently. Evaluated on functionality, accuracy, UX, innovation, and technical implementation.".into(),
            team_size: "2-3 members".into(),
            fee: "₹100".into(),
            ai_allowed: true,
            individual: false,
            judging_criteria: strings(&["Problem Understanding & Use Case", "Functionality & Accuracy", "Innovation & Creativity", "Performance & Reliability", "Presentation & Demonstration", "Time Management"]),
            rules: strings(&["Clearly inform users they're interacting with AI", "Include content moderation and safety filters", "2 min and 3 max members per team", "Respect intellectual property"]),
            contact_person: Some("AbdulKadir Shaikh".into()),
            contact_phone: Some("7434043381".into()),
            additional_info: None,
        },
        EventRecord {
            id: "tech-olympic".into(),
            name: "Tech Olympic".into(),
            category: EventCategory::Technical,
            synopsis: "Three-event coding marathon: Error (Fix the Code), Code Sprint, and Code War. Tests debugging, speed coding, teamwork, and competitive coding under pressure with a unique Ally-to-Enemy format in the finale.".into(),
            team_size: "Individual → Team → Solo".into(),
            fee: "₹100".into(),
            ai_allowed: false,
            individual: true,
            judging_criteria: strings(&["Output Accuracy", "Code Correctness", "Time Efficiency", "Code Quality", "Problems Solved", "Logical Approach"]),
            rules: strings(&["No Internet access", "No AI tools", "No external help", "Only successfully running programs evaluated", "Malpractice → disqualification"]),
            contact_person: Some("Mann Patel".into()),
            contact_phone: Some("9313471482".into()),
            additional_info: None,
        },
        EventRecord {
            id: "reverse-challenge".into(),
            name: "The Reverse Challenge".into(),
            category: EventCategory::Technical,
            synopsis: "Participants receive output samples without seeing the original code. They must analyze the logic and write a program that produces the exact same output. Tests reverse engineering and programming fundamentals.".into(),
            team_size: "Individual".into(),
            fee: "₹60".into(),
            ai_allowed: false,
            individual: true,
            judging_criteria: strings(&["Correctness of Output", "Logic & Problem Understanding", "Code Efficiency", "Code Quality & Readability", "Edge Case Handling", "Time Management", "Execution Without Errors"]),
            rules: strings(&["Only provided system/compiler can be used", "No Internet access", "Code must be written individually", "Output must exactly match including format", "No pre-written code or external libraries"]),
            contact_person: Some("Nishad Nakrani".into()),
            contact_phone: Some("7043441460".into()),
            additional_info: None,
        },
        EventRecord {
            id: "ctf".into(),
            name: "Catch Me If You Can (CTF)".into(),
            category: EventCategory::Technical,
            synopsis: "An exciting problem-solving and treasure-hunt style event. Solve a series of clues involving technical questions, logical reasoning, and puzzles. Each clue leads to the next challenge.".into(),
            team_size: "Individual or Team".into(),
            fee: "₹70".into(),
            ai_allowed: false,
            individual: true,
            judging_criteria: strings(&["Completion Time", "Accuracy", "Rule Compliance", "Fair Play", "Discipline & Conduct"]),
            rules: strings(&["Clues must be solved in sequence", "No skipping clues", "No Internet unless organizers allow", "Don't damage property", "Stay within allowed area", "Don't share clues"]),
            contact_person: Some("Sarthak Yerpude".into()),
            contact_phone: Some("9359990884".into()),
            additional_info: None,
        },
        EventRecord {
            id: "reel-a-twist".into(),
            name: "Reel-a-Twist".into(),
            category: EventCategory::NonTechnical,
            synopsis: "A reel making competition where participants get random themes via a twist wheel, then film and edit on-site. Create a 30-60 second reel within 90-120 minutes.".into(),
            team_size: "1-3 members".into(),
            fee: "₹100".into(),
            ai_allowed: false,
            individual: false,
            judging_criteria: strings(&["Creativity and originality", "Humor and entertainment value", "Execution and editing quality", "Adherence to the twist/theme"]),
            rules: strings(&["Reel must be filmed and edited on-site", "Pre-made reels → disqualification", "Content must be family-friendly", "Submit via pen drive", "Duration: 30-60 seconds"]),
            contact_person: Some("Bhupendra Sharma".into()),
            contact_phone: Some("8733090192".into()),
            additional_info: None,
        },
        EventRecord {
            id: "timeless-tadka".into(),
            name: "Timeless Tadka: Rewind & Caption".into(),
            category: EventCategory::NonTechnical,
            synopsis: "Two-round creative event. Round 1: Imagine History – creatively reinterpret a historical event. Round 2: Caption Contest – create an innovative caption for a photograph.".into(),
            team_size: "1-2 members".into(),
            fee: "₹70".into(),
            ai_allowed: false,
            individual: false,
            judging_criteria: strings(&["Relevance to theme", "Creativity and originality", "Humor and relatability", "Presentation and delivery", "Clarity and conciseness"]),
            rules: strings(&["No offensive language or hate speech", "3-5 minutes to present", "Captions must be original", "Max 20 words for captions"]),
            contact_person: Some("Srusti Patel".into()),
            contact_phone: Some("8511523125".into()),
            additional_info: None,
        },
        EventRecord {
            id: "people-got-talent".into(),
            name: "People Got Talent".into(),
            category: EventCategory::NonTechnical,
            synopsis: "Showcase your unique skills, creativity, and confidence. From performances to entertaining acts, this event celebrates talent in all its forms.".into(),
            team_size: "Individual".into(),
            fee: "₹40".into(),
            ai_allowed: false,
            individual: true,
            judging_criteria: strings(&["Talent and skill level", "Creativity and originality", "Stage presence and confidence", "Audience engagement", "Overall performance impact"]),
            rules: strings(&["Individual participation only", "Fixed time limit", "No offensive content", "Props allowed with approval", "Must report on time"]),
            contact_person: Some("Rehan Multani".into()),
            contact_phone: Some("9998647247".into()),
            additional_info: None,
        },
        EventRecord {
            id: "canvaverse".into(),
            name: "CanvaVerse".into(),
            category: EventCategory::NonTechnical,
            synopsis: "A Canva Designing Challenge that tests creativity and design skills under time pressure. Receive a surprise design brief and bring it to life using Canva.".into(),
            team_size: "Individual".into(),
            fee: "₹60".into(),
            ai_allowed: false,
            individual: true,
            judging_criteria: strings(&["Creativity and originality", "Adherence to theme", "Visual appeal and layout", "Color usage and typography", "Overall design quality"]),
            rules: strings(&["Must use Canva exclusively", "No AI tools", "Surprise theme given on spot", "No pre-made templates", "Complete within time limit"]),
            contact_person: Some("Rudra Patel".into()),
            contact_phone: Some("8401693584".into()),
            additional_info: None,
        },
        EventRecord {
            id: "rocketry".into(),
            name: "Rocketry".into(),
            category: EventCategory::NonTechnical,
            synopsis: "Build and launch your own water-powered rocket! Learn about forces, aerodynamics, and creativity in design. Compete for maximum altitude and distance.".into(),
            team_size: "Individual or Team".into(),
            fee: "₹70".into(),
            ai_allowed: false,
            individual: true,
            judging_criteria: strings(&["Maximum airtime", "Distance covered", "Design quality", "Build originality"]),
            rules: strings(&["Build from scratch – no kits", "Nozzle diameter: 2.5cm", "Only water as propellant", "No glass materials", "Must present at venue"]),
            contact_person: Some("Gulshan Tiwari".into()),
            contact_phone: Some("9130054768".into()),
            additional_info: None,
        },
        EventRecord {
            id: "robo-soccer".into(),
            name: "FootBots (Robo Soccer)".into(),
            category: EventCategory::Robotics,
            synopsis: "Two single robots from each team compete in a match mimicking a football game. Showcase robotics skills and strategy in competitive Robo Soccer.".into(),
            team_size: "1-10 players".into(),
            fee: "₹1000 (all 3 events)".into(),
            ai_allowed: false,
            individual: false,
            judging_criteria: strings(&["Goals scored", "Strategy", "Robot performance", "Team coordination"]),
            rules: strings(&["1 robot per team on field", "8 min game + 1.5 min break", "Robot size: 30x30cm", "Attachment: 15x30cm", "No readymade bots", "Semi-readymade base allowed"]),
            contact_person: None,
            contact_phone: None,
            additional_info: info(&[("Robot Size", "30x30cm"), ("Attachment", "15x30cm"), ("Match Duration", "8 min + 1.5 min break"), ("Ball", "Standard soccer ball")]),
        },
        EventRecord {
            id: "track-race".into(),
            name: "Turbo Tracks (Track Race)".into(),
            category: EventCategory::Robotics,
            synopsis: "Robots navigate a challenging track showcasing speed, agility, and precision. Features obstacles, balancing, control and speed challenges.".into(),
            team_size: "1-10 players".into(),
            fee: "₹1000 (all 3 events)".into(),
            ai_allowed: false,
            individual: false,
            judging_criteria: strings(&["Fastest completion time", "Track navigation", "Obstacle handling"]),
            rules: strings(&["Robot size: 30x30cm", "Wired or wireless allowed", "Must verify with coordinators 1 day prior", "No readjustment during run", "No readymade bots"]),
            contact_person: None,
            contact_phone: None,
            additional_info: info(&[("Robot Size", "30x30cm"), ("Track", "Obstacles + balancing + speed"), ("Connection", "Wired or Wireless")]),
        },
        EventRecord {
            id: "robo-war".into(),
            name: "Robo Clash (Robo War)".into(),
            category: EventCategory::Robotics,
            synopsis: "Two robots engage in combat in a battlefield scenario. Deploy one robot at a time, exhibit robotics prowess and tactical acumen in fierce competition.".into(),
            team_size: "1-10 players".into(),
            fee: "₹1000 (all 3 events)".into(),
            ai_allowed: false,
            individual: false,
            judging_criteria: strings(&["Combat effectiveness", "Robot durability", "Strategy", "Points system (1st:10, 2nd:7, 3rd:5)"]),
            rules: strings(&["Robot size: 30x30cm", "No cutters, flamethrowers, electric shockers", "5 min match duration", "Damage caused is not organizer's responsibility", "No readymade bots"]),
            contact_person: None,
            contact_phone: None,
            additional_info: info(&[("Robot Size", "30x30cm"), ("Arena", "4ft x 4ft x 2.5ft (Nylon Net)"), ("Match Duration", "5 minutes"), ("Forbidden", "Cutters, flamethrowers, electric shockers")]),
        },
        EventRecord {
            id: "valorant".into(),
            name: "Valorant Immortal Clutch".into(),
            category: EventCategory::Esports,
            synopsis: "Open tournament welcoming gaming enthusiasts. Teams of five compete in knockout format with Standard Matches.".into(),
            team_size: "5 players (+1 sub)".into(),
            fee: "₹500".into(),
            ai_allowed: false,
            individual: false,
            judging_criteria: strings(&["Match win"]),
            rules: strings(&["Cheats/third-party software → banned", "Disconnect before Round 3 → Rematch", "After Round 3 → Match continues", "Must bring own laptop"]),
            contact_person: None,
            contact_phone: None,
            additional_info: info(&[("Mode", "Standard Matches"), ("Format", "Knockouts"), ("Maps", "Decided by organizers / Map voting"), ("Early Rounds", "Best of 1"), ("Semi/Final", "Best of 3")]),
        },
        EventRecord {
            id: "free-fire".into(),
            name: "Free Fire".into(),
            category: EventCategory::Esports,
            synopsis: "Battle royale where up to 48 participants compete. Squads of 4 play across Bermuda and Purgatory maps. 6-8 matches with placement + kill points.".into(),
            team_size: "Squad (4 players)".into(),
            fee: "₹200".into(),
            ai_allowed: false,
            individual: false,
            judging_criteria: strings(&["Points Table (Placement + Kill points)"]),
            rules: strings(&["Custom Room mode", "Characters/Skills allowed", "Hacks → immediate disqualification", "Age 16+"]),
            contact_person: None,
            contact_phone: None,
            additional_info: info(&[("Mode", "Custom Room"), ("Maps", "Bermuda / Purgatory"), ("Matches", "6-8"), ("Scoring", "Placement + Kill points")]),
        },
        EventRecord {
            id: "bgmi".into(),
            name: "BGMI".into(),
            category: EventCategory::Esports,
            synopsis: "Battle royale with up to 100 participants. Squads of 4 compete across Erangel and Sanhok in TPP mode. 6-8 matches with rank + kill scoring.".into(),
            team_size: "Squad (4 players)".into(),
            fee: "₹300".into(),
            ai_allowed: false,
            individual: false,
            judging_criteria: strings(&["Points Table (Rank Points + Kills)"]),
            rules: strings(&["Custom Room – TPP", "No emulators", "Teaming/glitches → prohibited", "Age 16+"]),
            contact_person: None,
            contact_phone: None,
            additional_info: info(&[("Mode", "Custom Room – TPP"), ("Maps", "Erangel / Sanhok"), ("Matches", "6-8"), ("Scoring", "Rank Points + Kills")]),
        },
        EventRecord {
            id: "ipl-royale".into(),
            name: "IPL Royale: Battle of the Bidders".into(),
            category: EventCategory::Funzone,
            synopsis: "Step into the shoes of IPL franchise owners, strategically bidding on players to form the strongest team within 50 Crore Points budget. Blind bidding above 9 Crore!".into(),
            team_size: "5 members (incl. 1 female)".into(),
            fee: "₹200".into(),
            ai_allowed: false,
            individual: false,
            judging_criteria: strings(&["Highest combined player rating", "Strategic budget management"]),
            rules: strings(&["50 Crore Points budget", "Blind bidding above 9 Crore", "Must include at least 1 female player", "Exceeding budget → penalties"]),
            contact_person: None,
            contact_phone: None,
            additional_info: info(&[("Budget", "50 Crore Points"), ("Blind Bidding", "Above 9 Crore Points"), ("Team", "5 members (min 1 female)"), ("Twist", "Revealed during live event")]),
        },
        EventRecord {
            id: "roadies".into(),
            name: "Roadies Challenge".into(),
            category: EventCategory::Funzone,
            synopsis: "Ultimate test of strength, strategy, and teamwork. Physical challenges, mental puzzles, problem-solving activities, and creative tasks across 5-6 rounds.".into(),
            team_size: "5-6 members".into(),
            fee: "₹30".into(),
            ai_allowed: false,
            individual: false,
            judging_criteria: strings(&["Physical task performance", "Mental puzzle solving", "Teamwork", "Creative tasks", "Cumulative performance"]),
            rules: strings(&["5-6 rounds of mixed tasks", "Teams may be eliminated after rounds", "Some rounds may be vote-outs", "Solo and team both can participate"]),
            contact_person: None,
            contact_phone: None,
            additional_info: info(&[("Rounds", "5-6"), ("Tasks", "Physical, Mental, Teamwork, Creative"), ("Elimination", "Round-based")]),
        },
        EventRecord {
            id: "traitors".into(),
            name: "The Traitors Game".into(),
            category: EventCategory::Funzone,
            synopsis: "Strategic role-based deduction game. Players are assigned as Killers, Doctors, or Citizens. Night and day phases with hidden actions and open discussions determine survival.".into(),
            team_size: "Group event".into(),
            fee: "₹30".into(),
            ai_allowed: false,
            individual: true,
            judging_criteria: strings(&["Survival", "Deduction skills", "Strategic play"]),
            rules: strings(&["Roles assigned secretly", "Night: Killers select target, Doctors save", "Day: 2 min discussion + voting", "No communication during night phase", "Eliminated players can't reveal roles"]),
            contact_person: None,
            contact_phone: None,
            additional_info: info(&[("Killers", "3-4 participants"), ("Doctors", "1-2 participants"), ("Citizens", "Remaining"), ("Win (Citizens)", "Eliminate all Killers"), ("Win (Killers)", "Outnumber remaining")]),
        },
    ]
});

static PROGRAMS: LazyLock<Vec<Program>> = LazyLock::new(|| {
    let ug = |name: &str, description: &str| Program {
        name: name.into(),
        duration: "4 Years".into(),
        fee: "₹3.34 Lakhs (total)".into(),
        kind: ProgramKind::Ug,
        description: description.into(),
    };
    vec![
        ug("B.Tech Computer Science Engineering", "Core computer science with focus on algorithms, data structures, software engineering, and modern computing paradigms."),
        ug("B.Tech Computer Engineering", "Blend of hardware and software engineering with focus on computer systems design and architecture."),
        ug("B.Tech Software Engineering", "Specialized in software development lifecycle, methodologies, quality assurance, and project management."),
        ug("B.Tech AI & Machine Learning", "Focus on artificial intelligence, deep learning, neural networks, NLP, and intelligent systems."),
        ug("B.Tech Cyber Security", "Network security, ethical hacking, cryptography, digital forensics, and information security."),
        ug("B.Tech Cloud Computing", "Cloud architectures, virtualization, containerization, distributed systems, and cloud services."),
        ug("B.Tech Information Technology", "Information systems, web technologies, databases, and IT infrastructure management."),
        Program {
            name: "Integrated M.Tech CSE".into(),
            duration: "5 Years".into(),
            fee: "Contact Institute".into(),
            kind: ProgramKind::Integrated,
            description: "Deep focus on core CS plus advanced research knowledge in a 5-year integrated program.".into(),
        },
        Program {
            name: "M.Tech CSE".into(),
            duration: "2 Years".into(),
            fee: "Contact Institute".into(),
            kind: ProgramKind::Pg,
            description: "Advanced computer science with research focus. Intake: 120 students.".into(),
        },
    ]
});

static INSTITUTE: LazyLock<InstituteInfo> = LazyLock::new(|| InstituteInfo {
    name: "Asha M. Tarsadia Institute of Computer Science and Technology".into(),
    short_name: "AMTICS".into(),
    university: "Uka Tarsadia University (UTU)".into(),
    location: "Maliba Campus, Gopal Vidyanagar, Bardoli–Mahuva Road, Surat, Gujarat, India".into(),
    accreditation: "NAAC-accredited (UTU ecosystem)".into(),
    overview: "AMTICS is a constituent institute of Uka Tarsadia University, Gujarat. The institute focuses exclusively on computer science and emerging technology education, offering undergraduate and postgraduate programs designed to meet modern industry needs. It's a hub of innovation and excellence in Computer Science education with industry-aligned, skill-based programs.".into(),
    admission_routes: vec![
        "ACPC (Gujarat Admission Committee)".into(),
        "Direct admission route".into(),
    ],
    eligibility: "Pass 12th board exam OR diploma".into(),
});

static FALLBACK_FACULTY: LazyLock<Vec<FacultyRecord>> = LazyLock::new(|| {
    let member = |name: &str, designation: &str, email: &str, expertise: &str| FacultyRecord {
        name: name.into(),
        designation: designation.into(),
        email: email.into(),
        expertise: expertise.into(),
    };
    vec![
        member("Dr. Vishvajit Bakrola", "I/C Director", "vishvajit.bakrola@utu.ac.in", "ML, Deep Learning, AI, Robotics, NLP, Brain Computer Interface, IoT, Quantum/Neuromorphic Computing"),
        member("Mr. Jay Patel", "Assistant Professor", "jay.patel@utu.ac.in", "Industrial Automation, Renewable Energy, Smart Switchgear, Electric Vehicles, Digital Electronics"),
        member("Ms. Dipashree Patel", "Assistant Professor", "dipashree.patel@utu.ac.in", "Real Analysis, Linear Algebra, Discrete Mathematics, Abstract Algebra"),
        member("Ms. Vibhuti Patel", "Assistant Professor", "vibhuti.patel@utu.ac.in", "Power System, Industrial Automation, Instrumentation"),
        member("Ms. Vidhi Sutaria", "Assistant Professor", "vidhi.sutaria@utu.ac.in", "Cloud Computing, Information Network Security"),
        member("Ms. Urvishabahen Patel", "Assistant Professor", "urvisha.patel@utu.ac.in", "Machine Learning, Data Science with Python, Computer Vision, Image Processing"),
        member("Mr. Aakash Parmar", "Assistant Professor", "aakash.parmar@utu.ac.in", "AI, ML, Soft Computing, Digital Forensics, Data Structures, Python, Operating Systems"),
        member("Ms. Vidhi Patel", "Assistant Professor", "vidhi.patel@utu.ac.in", "Data Structure, Web Designing/Development, Compiler Design, Software Engineering"),
        member("Ms. Halak Patel", "Assistant Professor", "halak.patel@utu.ac.in", "DBMS, Analysis and Design Algorithm, Web Design, Software Modeling"),
        member("Ms. Roshni Patel", "Assistant Professor", "roshni.patel@utu.ac.in", "Data Mining, Web Designing/Development, Operating System, DBMS"),
        member("Ms. Mitaliben Patel", "Assistant Professor", "mitali.cpatel@utu.ac.in", "Computer Network, Web Designing/Development, Software Engineering"),
        member("Mr. Santosh Saha", "Assistant Professor", "santosh.saha@utu.ac.in", "DBMS, OS, OOPS, Mobile Computing, ML, Cyber Security, IoT"),
        member("Mr. Vishvendu Bhatt", "Assistant Professor", "vishvendu.bhatt@utu.ac.in", "Machine Learning, Information Security, Android Development, Computer Networks, Cloud Computing"),
        member("Mr. Dipesh Shahane", "Assistant Professor", "dipesh.shahane@utu.ac.in", "Operating Systems"),
        member("Mr. Dharmesh Kokani", "Assistant Professor", "dharmesh.kokani@utu.ac.in", "C, OOPs, Java, Python, DBMS, Web Development, Software Engineering"),
        member("Mr. Amit Kumar", "Assistant Professor", "amit.kumar@utu.ac.in", "5G, Wireless Communication, Signal Processing, Digital Logic, Control Systems"),
        member("Mr. Ankur Gamit", "Assistant Professor", "ankur.gamit@utu.ac.in", "Machine Learning, Deep Learning, NLP, Databases, Web Development"),
        member("Ms. Ridhdhi Naik", "Assistant Professor", "ridhdhi.naik@utu.ac.in", "ML, AI, Data Science, IoT, Data Structures, Wireless Communication"),
    ]
});

/// All fest events in catalog order (technical first, fun zone last).
pub fn events() -> &'static [EventRecord] {
    &EVENTS
}

/// Academic programs offered by the institute.
pub fn programs() -> &'static [Program] {
    &PROGRAMS
}

/// Static institute facts.
pub fn institute() -> &'static InstituteInfo {
    &INSTITUTE
}

/// Faculty roster used when the faculty source degraded to empty.
pub fn fallback_faculty() -> &'static [FacultyRecord] {
    &FALLBACK_FACULTY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_ids_unique() {
        let mut ids: Vec<&str> = events().iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(before, ids.len());
    }

    #[test]
    fn test_all_categories_present() {
        for category in [
            EventCategory::Technical,
            EventCategory::NonTechnical,
            EventCategory::Robotics,
            EventCategory::Esports,
            EventCategory::Funzone,
        ] {
            assert!(
                events().iter().any(|e| e.category == category),
                "no events in category {:?}",
                category
            );
        }
    }

    #[test]
    fn test_fallback_roster_has_director() {
        assert!(fallback_faculty()
            .iter()
            .any(|f| f.designation.contains("Director")));
    }
}

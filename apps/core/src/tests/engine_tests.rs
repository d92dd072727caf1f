//! Engine Tests
//!
//! Full answer composition over a fixture snapshot: intent priority,
//! multiplicity branching, threshold filters and fallback behavior.

#[cfg(test)]
mod assistant_tests {
    use crate::engine::{CampusAssistant, Intent, CAPABILITY_MENU};
    use crate::tests::fixtures::{init_tracing, sample_snapshot};

    fn respond(query: &str) -> String {
        init_tracing();
        CampusAssistant::new().respond(query, &sample_snapshot())
    }

    #[test]
    fn test_determinism() {
        let assistant = CampusAssistant::new();
        let snapshot = sample_snapshot();
        let queries = [
            "who is the director of amtics?",
            "students in cyber security",
            "events under ₹100",
            "expertise of vidhi sutaria",
        ];
        for query in queries {
            let first = assistant.respond(query, &snapshot);
            let second = assistant.respond(query, &snapshot);
            assert_eq!(first, second, "same snapshot, same query, same answer");
            assert_eq!(assistant.classify(query), assistant.classify(query));
        }
    }

    #[test]
    fn test_single_match_returns_requested_field_only() {
        let answer = respond("expertise of vidhi sutaria");
        assert_eq!(
            answer,
            "**Ms. Vidhi Sutaria**'s expertise: Cloud Computing, Information Network Security"
        );
    }

    #[test]
    fn test_zero_match_names_the_search_term() {
        let answer = respond("expertise of tarak mehta");
        assert!(answer.contains("No faculty member found matching \"tarak mehta\""));
    }

    #[test]
    fn test_multi_match_lists_at_most_five_and_counts_the_rest() {
        let answer = respond("who is patel from faculty");
        assert!(answer.contains("Found 6 faculty members matching \"patel\""));
        assert_eq!(answer.matches("\n- **").count(), 5);
        assert!(answer.contains("...and 1 more."));
        assert!(answer.contains("_Please specify the full name for exact match._"));
    }

    #[test]
    fn test_student_attribute_after_ambiguous_faculty() {
        // "patel" is ambiguous among faculty but unique among students, so
        // the student attribute branch answers.
        let answer = respond("email of patel");
        assert_eq!(answer, "**Dev Patel**'s email: dev.patel@utu.ac.in");
    }

    #[test]
    fn test_student_lookup_multiplicity() {
        let single = respond("who is riya shah from students");
        assert!(single.contains("## Student: Riya Shah"));
        assert!(single.contains("**Enrollment No:** 202403103510225"));

        let ambiguous = respond("who is shah from students");
        assert!(ambiguous.contains("Found 2 students matching \"shah\""));

        let missing = respond("who is zorro from students");
        assert!(missing.contains("No student found matching \"zorro\""));
    }

    #[test]
    fn test_fee_threshold_is_strictly_less_than() {
        let answer = respond("events under ₹100");
        assert!(answer.starts_with("## Events Under ₹100"));
        // ₹70 and ₹60 qualify; ₹100 does not.
        assert!(answer.contains("Figma Forge"));
        assert!(answer.contains("The Reverse Challenge"));
        assert!(!answer.contains("Chatbot Challenge"));
        assert!(!answer.contains("Tech Olympic"));
    }

    #[test]
    fn test_fee_threshold_other_amounts() {
        let answer = respond("any events under 50?");
        assert!(answer.starts_with("## Events Under ₹50"));
        assert!(answer.contains("People Got Talent"));
        assert!(answer.contains("Roadies Challenge"));
        assert!(!answer.contains("Figma Forge"));

        let none = respond("events under ₹20");
        assert!(none.contains("No events found under ₹20."));
    }

    #[test]
    fn test_enrollment_lookup_ignores_stored_spacing() {
        let answer = respond("enrollment no 202403103510301");
        assert!(answer.contains("## Student: Aman Verma"));

        let missing = respond("enrollment no 999999999999");
        assert!(missing.contains("No student found with enrollment number **999999999999**"));
    }

    #[test]
    fn test_program_union_filter_sorted_and_deduplicated() {
        let answer = respond("students in cyber security");
        assert!(answer.contains("## Students in **cyber security** (4 found)"));
        // Union over branch, both electives and industrial practice.
        let aman = answer.find("Aman Verma").expect("elective II match");
        let kunal = answer.find("Kunal Mehta").expect("branch match");
        let priya = answer.find("Priya Desai").expect("industrial practice match");
        let riya = answer.find("Riya Shah").expect("elective IV match");
        assert!(aman < kunal && kunal < priya && priya < riya, "sorted by name");
        assert_eq!(answer.matches("Riya Shah").count(), 1, "no duplicates");
    }

    #[test]
    fn test_program_zero_match_suggests_alternatives() {
        let answer = respond("students in astrophysics");
        assert!(answer.contains("No students found in **astrophysics**"));
        assert!(answer.contains("\"list all students\""));
    }

    #[test]
    fn test_bulk_student_list() {
        let answer = respond("list all students");
        assert!(answer.contains("## All students (6 total)"));
        let aman = answer.find("Aman Verma").expect("first by name");
        let riya = answer.find("Riya Shah").expect("last by name");
        assert!(aman < riya);
    }

    #[test]
    fn test_fallback_menu_verbatim() {
        assert_eq!(respond("xyzzy quux"), CAPABILITY_MENU);
        assert_eq!(respond(""), CAPABILITY_MENU);
        assert_eq!(respond("   "), CAPABILITY_MENU);
    }

    #[test]
    fn test_director_card() {
        let answer = respond("who is the director of amtics?");
        assert!(answer.contains("**Dr. Vishvajit Bakrola** is the I/C Director of AMTICS."));
        assert!(answer.contains("📧 Email: vishvajit.bakrola@utu.ac.in"));
    }

    #[test]
    fn test_person_lookup_falls_through_to_event_card() {
        // No person named "the chatbot challenge"; the event branch answers.
        let answer = respond("tell me about the chatbot challenge");
        assert!(answer.starts_with("## Chatbot Challenge"));
        assert!(answer.contains("### Judging Criteria"));
        assert!(answer.contains("**AI Allowed:** Yes ✅"));
    }

    #[test]
    fn test_event_card_includes_specifications() {
        let answer = respond("tell me about robo soccer");
        assert!(answer.starts_with("## FootBots (Robo Soccer)"));
        assert!(answer.contains("### Specifications"));
        assert!(answer.contains("**Robot Size:** 30x30cm"));
    }

    #[test]
    fn test_faculty_list_caps_at_ten() {
        let answer = respond("list faculty and their expertise");
        assert!(answer.contains("## AMTICS Faculty"));
        assert!(answer.contains("The institute has **8** faculty members"));
        assert!(!answer.contains("...and"), "8 entries fit without a more-line");
    }

    #[test]
    fn test_ai_allowed_events() {
        let answer = respond("which events allow ai tools?");
        assert!(answer.contains("## Events Where AI is Allowed"));
        assert!(answer.contains("Chatbot Challenge"));
        assert!(!answer.contains("Figma Forge"));
    }

    #[test]
    fn test_program_fees_card() {
        let answer = respond("what programs does amtics offer and their fees?");
        assert!(answer.contains("## Academic Programs at AMTICS"));
        assert!(answer.contains("B.Tech Cyber Security"));
        assert!(answer.contains("₹3.34 Lakhs (total)"));
    }

    #[test]
    fn test_coordinator_excerpt_from_rules_text() {
        // "event coordinators" would hit the event-list branch first; a bare
        // coordinator query reaches the excerpt.
        let answer = respond("coordinator contact numbers");
        assert!(answer.contains("Coordinators & Contacts"));
        assert!(answer.contains("Alice Coordinator 9999999999"));
        assert!(!answer.contains("GENERAL RULES"));
    }

    #[test]
    fn test_coordinator_branch_declines_without_rules_text() {
        let assistant = CampusAssistant::new();
        let mut snapshot = sample_snapshot();
        snapshot.events_rules_text.clear();
        let answer = assistant.respond("coordinator contact numbers", &snapshot);
        assert_eq!(answer, CAPABILITY_MENU);
    }

    #[test]
    fn test_institute_about_and_admission() {
        let about = respond("tell me about amtics institute");
        assert!(about.contains("Asha M. Tarsadia Institute"));
        assert!(about.contains("📍 **Location:**"));

        let admission = respond("how do i apply for admission?");
        assert!(admission.contains("## Admission to AMTICS"));
        assert!(admission.contains("ACPC"));
    }

    #[test]
    fn test_event_list_grouped_by_category() {
        let answer = respond("what events are available at tecxplore 3.0?");
        assert!(answer.starts_with("## TecXplore 3.0 Events"));
        for heading in ["### Technical", "### Non-Technical", "### Robotics", "### E-Sports", "### Fun Zone"] {
            assert!(answer.contains(heading), "missing {}", heading);
        }
    }

    #[test]
    fn test_comparison_pointer() {
        // A named event wins over the comparison pointer, so compare two
        // unnamed things.
        let answer = respond("compare two events");
        assert!(answer.contains("Comparison Page"));
    }

    #[test]
    fn test_division_list_and_cyber_elective_filter() {
        let division = respond("show the sem 4 division");
        assert!(division.contains("## Sem 4 Division (complete list)"));
        assert!(division.contains("_Total **6** students in the division._"));

        let cyber = respond("which students have a cyber security elective?");
        assert!(cyber.contains("## Students with Cyber Security / related elective"));
        assert!(cyber.contains("Riya Shah"));
        assert!(cyber.contains("Aman Verma"));
        assert!(!cyber.contains("Kunal Mehta"), "branch-only match is not an elective");
    }

    #[test]
    fn test_empty_faculty_degrades_to_compiled_roster() {
        let assistant = CampusAssistant::new();
        let mut snapshot = sample_snapshot();
        snapshot.faculty.clear();
        let answer = assistant.respond("who is the director of amtics?", &snapshot);
        assert!(answer.contains("Dr. Vishvajit Bakrola"));

        let list = assistant.respond("list all faculty members", &snapshot);
        assert!(list.contains("The institute has **18** faculty members"));
    }

    #[test]
    fn test_classification_examples() {
        let assistant = CampusAssistant::new();
        assert_eq!(
            assistant.classify("who are enrolled in cyber security program?"),
            Intent::ProgramEnrollment
        );
        assert_eq!(assistant.classify("list all students"), Intent::BulkStudentList);
        assert_eq!(
            assistant.classify("expertise of vidhi sutaria"),
            Intent::PersonAttribute
        );
        assert_eq!(assistant.classify("who is the director?"), Intent::PersonLookup);
        assert_eq!(assistant.classify("events under ₹100"), Intent::FeeThreshold);
        assert_eq!(assistant.classify("random gibberish"), Intent::Fallback);
    }
}

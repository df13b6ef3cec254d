// src/fixtures.rs

//! Static sample data: the problem set served by the fixture backend and the
//! profile, submissions and solved set behind `FixtureUserRepository`.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    problem::{Difficulty, Problem, ProblemExample, SupportedLanguage},
    submission::{Submission, SubmissionStatus},
    user::{Badge, BadgeRarity, User, UserSocials, UserStats},
};

fn starter(entries: &[(SupportedLanguage, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(lang, code)| (lang.as_str().to_string(), code.to_string()))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn example(input: &str, output: &str, explanation: Option<&str>) -> ProblemExample {
    ProblemExample {
        input: input.to_string(),
        output: output.to_string(),
        explanation: explanation.map(str::to_string),
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

/// The sample problem set, ids "1" through "5".
pub fn sample_problems() -> Vec<Problem> {
    use SupportedLanguage::*;

    vec![
        Problem {
            object_id: "1".to_string(),
            id: Some("two-sum".to_string()),
            title: "Two Sum".to_string(),
            description: Some(
                "Given an array of integers nums and an integer target, return indices of the two numbers such that they add up to target."
                    .to_string(),
            ),
            difficulty: Some(Difficulty::Easy),
            category: strings(&["array", "hash-table"]),
            constraints: strings(&[
                "2 <= nums.length <= 10^4",
                "-10^9 <= nums[i] <= 10^9",
                "Only one valid answer exists.",
            ]),
            examples: vec![
                example(
                    "nums = [2,7,11,15], target = 9",
                    "[0,1]",
                    Some("Because nums[0] + nums[1] == 9, we return [0, 1]."),
                ),
                example("nums = [3,2,4], target = 6", "[1,2]", None),
            ],
            starter_code: starter(&[
                (Javascript, "function twoSum(nums, target) {\n  \n}\n"),
                (Python, "def two_sum(nums, target):\n    pass\n"),
                (
                    Java,
                    "class Solution {\n    public int[] twoSum(int[] nums, int target) {\n        \n    }\n}\n",
                ),
                (
                    Cpp,
                    "class Solution {\npublic:\n    vector<int> twoSum(vector<int>& nums, int target) {\n        \n    }\n};\n",
                ),
                (
                    Rust,
                    "fn two_sum(nums: Vec<i32>, target: i32) -> Vec<i32> {\n    todo!()\n}\n",
                ),
            ]),
            solution_code: starter(&[(
                Python,
                "def two_sum(nums, target):\n    seen = {}\n    for i, n in enumerate(nums):\n        if target - n in seen:\n            return [seen[target - n], i]\n        seen[n] = i\n",
            )]),
            hints: strings(&[
                "A brute force over every pair works but is quadratic.",
                "Remember which values you have already seen and where.",
            ]),
            time_limit: 1000,
            memory_limit: 256,
            likes: 1523,
            submissions: 9820,
            success_rate: 48.5,
            created_at: Some("2024-01-10".to_string()),
        },
        Problem {
            object_id: "2".to_string(),
            id: Some("valid-parentheses".to_string()),
            title: "Valid Parentheses".to_string(),
            description: Some(
                "Given a string s containing just the characters '(', ')', '{', '}', '[' and ']', determine if the input string is valid."
                    .to_string(),
            ),
            difficulty: Some(Difficulty::Easy),
            category: strings(&["stack", "string"]),
            constraints: strings(&["1 <= s.length <= 10^4"]),
            examples: vec![
                example("s = \"()[]{}\"", "true", None),
                example("s = \"(]\"", "false", None),
            ],
            starter_code: starter(&[
                (Javascript, "function isValid(s) {\n  \n}\n"),
                (Python, "def is_valid(s):\n    pass\n"),
            ]),
            solution_code: HashMap::new(),
            hints: strings(&["Push openers, pop on closers."]),
            time_limit: 1000,
            memory_limit: 128,
            likes: 812,
            submissions: 5310,
            success_rate: 41.2,
            created_at: Some("2024-01-12".to_string()),
        },
        Problem {
            object_id: "3".to_string(),
            id: Some("longest-substring".to_string()),
            title: "Longest Substring Without Repeating Characters".to_string(),
            description: Some(
                "Given a string s, find the length of the longest substring without repeating characters."
                    .to_string(),
            ),
            difficulty: Some(Difficulty::Medium),
            category: strings(&["string", "sliding-window"]),
            constraints: strings(&["0 <= s.length <= 5 * 10^4"]),
            examples: vec![example(
                "s = \"abcabcbb\"",
                "3",
                Some("The answer is \"abc\", with the length of 3."),
            )],
            starter_code: starter(&[(Javascript, "function lengthOfLongestSubstring(s) {\n  \n}\n")]),
            solution_code: HashMap::new(),
            hints: Vec::new(),
            time_limit: 2000,
            memory_limit: 256,
            likes: 640,
            submissions: 7001,
            success_rate: 33.9,
            created_at: Some("2024-02-01".to_string()),
        },
        Problem {
            object_id: "4".to_string(),
            id: Some("merge-k-sorted-lists".to_string()),
            title: "Merge K Sorted Lists".to_string(),
            description: None,
            difficulty: Some(Difficulty::Hard),
            category: strings(&["linked-list", "heap"]),
            constraints: Vec::new(),
            examples: Vec::new(),
            starter_code: starter(&[(Cpp, "ListNode* mergeKLists(vector<ListNode*>& lists) {\n    \n}\n")]),
            solution_code: HashMap::new(),
            hints: Vec::new(),
            time_limit: 3000,
            memory_limit: 512,
            likes: 402,
            submissions: 2950,
            success_rate: 27.4,
            created_at: Some("2024-02-14".to_string()),
        },
        Problem {
            object_id: "5".to_string(),
            id: Some("minimum-window-substring".to_string()),
            title: "Minimum Window Substring".to_string(),
            description: Some(
                "Given two strings s and t, return the minimum window substring of s such that every character in t is included in the window."
                    .to_string(),
            ),
            difficulty: Some(Difficulty::Expert),
            category: Vec::new(),
            constraints: strings(&["1 <= s.length, t.length <= 10^5"]),
            examples: Vec::new(),
            starter_code: starter(&[(Javascript, "function minWindow(s, t) {\n  \n}\n")]),
            solution_code: HashMap::new(),
            hints: strings(&["Expand the right edge until valid, then shrink from the left."]),
            time_limit: 2000,
            memory_limit: 256,
            likes: 377,
            submissions: 1804,
            success_rate: 22.1,
            created_at: Some("2024-03-03".to_string()),
        },
    ]
}

/// The demo profile shown on the profile page.
pub fn sample_user() -> User {
    User {
        id: "user1".to_string(),
        username: "codesparker".to_string(),
        email: "john.doe@example.com".to_string(),
        display_name: "John Doe".to_string(),
        bio: Some(
            "Software engineer passionate about algorithms and data structures. Always looking to improve my problem-solving skills."
                .to_string(),
        ),
        avatar_url: None,
        created_at: "2023-01-15".to_string(),
        stats: UserStats {
            total_solved: 42,
            total_submissions: 87,
            streak: 12,
            rank: 256,
            points: 1240,
            easy_problems: 25,
            medium_problems: 14,
            hard_problems: 3,
            expert_problems: 0,
        },
        badges: vec![
            Badge {
                id: "badge1".to_string(),
                name: "First Blood".to_string(),
                description: "Solved your first problem".to_string(),
                icon: "trophy".to_string(),
                rarity: BadgeRarity::Common,
                earned_at: "2023-01-16".to_string(),
            },
            Badge {
                id: "badge2".to_string(),
                name: "Streak Master".to_string(),
                description: "Maintained a 7-day problem-solving streak".to_string(),
                icon: "fire".to_string(),
                rarity: BadgeRarity::Rare,
                earned_at: "2023-02-10".to_string(),
            },
            Badge {
                id: "badge3".to_string(),
                name: "Speed Demon".to_string(),
                description: "Solved a hard problem in less than 10 minutes".to_string(),
                icon: "lightning".to_string(),
                rarity: BadgeRarity::Epic,
                earned_at: "2023-03-05".to_string(),
            },
        ],
        socials: Some(UserSocials {
            github: Some("johndoe".to_string()),
            twitter: Some("johndoe".to_string()),
            linkedin: Some("john-doe".to_string()),
            website: Some("https://johndoe.com".to_string()),
        }),
    }
}

/// Submission history of the demo user, newest first.
pub fn sample_submissions() -> Vec<Submission> {
    let submission = |id: &str,
                      problem_id: &str,
                      code: &str,
                      language: SupportedLanguage,
                      status: SubmissionStatus,
                      runtime: u64,
                      memory: u64,
                      submitted_at: DateTime<Utc>| Submission {
        id: id.to_string(),
        user_id: "user1".to_string(),
        problem_id: problem_id.to_string(),
        code: code.to_string(),
        language,
        status,
        runtime,
        memory,
        submitted_at,
    };

    vec![
        submission(
            "1",
            "3",
            "function lengthOfLongestSubstring(s) { /* code here */ }",
            SupportedLanguage::Javascript,
            SubmissionStatus::Accepted,
            56,
            42,
            at(2023, 4, 10, 14, 48),
        ),
        submission(
            "2",
            "1",
            "function twoSum(nums, target) { /* code here */ }",
            SupportedLanguage::Javascript,
            SubmissionStatus::Accepted,
            32,
            38,
            at(2023, 4, 9, 10, 15),
        ),
        submission(
            "3",
            "2",
            "function isValid(s) { /* code here */ }",
            SupportedLanguage::Python,
            SubmissionStatus::WrongAnswer,
            25,
            24,
            at(2023, 4, 8, 16, 30),
        ),
        submission(
            "4",
            "5",
            "function minWindow(s, t) { /* code here */ }",
            SupportedLanguage::Javascript,
            SubmissionStatus::TimeLimitExceeded,
            2001,
            87,
            at(2023, 4, 7, 9, 22),
        ),
        submission(
            "5",
            "4",
            "function mergeKLists(lists) { /* code here */ }",
            SupportedLanguage::Cpp,
            SubmissionStatus::RuntimeError,
            0,
            0,
            at(2023, 4, 6, 14, 5),
        ),
    ]
}

/// Ids of problems the demo user has solved.
pub fn sample_solved_ids() -> HashSet<String> {
    HashSet::from(["1".to_string()])
}

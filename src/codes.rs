//! Human-readable labels for the categorical codes offered by the entry form.
//!
//! This is a display aid only. Bucketing never consults it, and a code missing
//! from here is still a valid input.

use crate::domain::fields;

/// `(code, label)` pairs for one field.
pub type CodeList = &'static [(i64, &'static str)];

const MARITAL_STATUS: CodeList = &[
    (1, "Single"),
    (2, "Married"),
    (3, "Widower"),
    (4, "Divorced"),
    (5, "Facto union"),
    (6, "Legally separated"),
];

const APPLICATION_MODE: CodeList = &[
    (1, "1st phase - general contingent"),
    (2, "Ordinance No. 612/93"),
    (5, "1st phase - special contingent (Azores Island)"),
    (7, "Holders of other higher courses"),
    (10, "Ordinance No. 854-B/99"),
    (15, "International student (bachelor)"),
    (16, "1st phase - special contingent (Madeira Island)"),
    (17, "2nd phase - general contingent"),
    (18, "3rd phase - general contingent"),
    (26, "Ordinance No. 533-A/99, item b2 (different plan)"),
    (27, "Ordinance No. 533-A/99, item b3 (other institution)"),
    (39, "Over 23 years old"),
    (42, "Transfer"),
    (43, "Change of course"),
    (44, "Technological specialization diploma holders"),
    (51, "Change of institution/course"),
    (53, "Short cycle diploma holders"),
    (57, "Change of institution/course (international)"),
];

const COURSE: CodeList = &[
    (33, "Biofuel Production Technologies"),
    (171, "Animation and Multimedia Design"),
    (8014, "Social Service (evening attendance)"),
    (9003, "Agronomy"),
    (9070, "Communication Design"),
    (9085, "Veterinary Nursing"),
    (9119, "Informatics Engineering"),
    (9130, "Equinculture"),
    (9147, "Management"),
    (9238, "Social Service"),
    (9254, "Tourism"),
    (9500, "Nursing"),
    (9556, "Oral Hygiene"),
    (9670, "Advertising and Marketing Management"),
    (9773, "Journalism and Communication"),
    (9853, "Basic Education"),
    (9991, "Management (evening attendance)"),
];

const PREVIOUS_QUALIFICATION: CodeList = &[
    (1, "Secondary education"),
    (2, "Higher education - bachelor's degree"),
    (3, "Higher education - degree"),
    (4, "Higher education - master's"),
    (5, "Higher education - doctorate"),
    (6, "Frequency of higher education"),
    (9, "12th year of schooling - not completed"),
    (10, "11th year of schooling - not completed"),
    (12, "Other - 11th year of schooling"),
    (14, "10th year of schooling"),
    (15, "10th year of schooling - not completed"),
    (19, "Basic education 3rd cycle (9th/10th/11th year) or equiv."),
    (38, "Basic education 2nd cycle (6th/7th/8th year) or equiv."),
    (39, "Technological specialization course"),
    (40, "Higher education - degree (1st cycle)"),
    (42, "Professional higher technical course"),
    (43, "Higher education - master (2nd cycle)"),
];

const NACIONALITY: CodeList = &[
    (1, "Portuguese"),
    (2, "German"),
    (6, "Spanish"),
    (11, "Italian"),
    (13, "Dutch"),
    (14, "English"),
    (17, "Lithuanian"),
    (21, "Angolan"),
    (22, "Cape Verdean"),
    (24, "Guinean"),
    (25, "Mozambican"),
    (26, "Santomean"),
    (32, "Turkish"),
    (41, "Brazilian"),
    (62, "Romanian"),
    (100, "Moldova (Republic of)"),
    (101, "Mexican"),
    (103, "Ukrainian"),
    (105, "Russian"),
    (108, "Cuban"),
    (109, "Colombian"),
];

const PARENT_QUALIFICATION: CodeList = &[
    (1, "Secondary education - 12th year of schooling or eq."),
    (2, "Higher education - bachelor's degree"),
    (3, "Higher education - degree"),
    (4, "Higher education - master's"),
    (5, "Higher education - doctorate"),
    (6, "Frequency of higher education"),
    (9, "12th year of schooling - not completed"),
    (10, "11th year of schooling - not completed"),
    (11, "7th year (old)"),
    (12, "Other - 11th year of schooling"),
    (14, "10th year of schooling"),
    (18, "General commerce course"),
    (19, "Basic education 3rd cycle (9th/10th/11th year) or equiv."),
    (22, "Technical-professional course"),
    (26, "7th year of schooling"),
    (27, "2nd cycle of the general high school course"),
    (29, "9th year of schooling - not completed"),
    (30, "8th year of schooling"),
    (34, "Unknown"),
    (35, "Can't read or write"),
    (36, "Can read without having a 4th year of schooling"),
    (37, "Basic education 1st cycle (4th/5th year) or equiv."),
    (38, "Basic education 2nd cycle (6th/7th/8th year) or equiv."),
    (39, "Technological specialization course"),
    (40, "Higher education - degree (1st cycle)"),
    (41, "Specialized higher studies course"),
    (42, "Professional higher technical course"),
    (43, "Higher education - master (2nd cycle)"),
    (44, "Higher education - doctorate (3rd cycle)"),
];

const PARENT_OCCUPATION: CodeList = &[
    (0, "Student"),
    (
        1,
        "Representatives of the legislative power and executive bodies, directors and executive managers",
    ),
    (2, "Specialists in intellectual and scientific activities"),
    (3, "Intermediate level technicians and professions"),
    (4, "Administrative staff"),
    (5, "Personal services, security and safety workers and sellers"),
    (6, "Farmers and skilled workers in agriculture, fisheries and forestry"),
    (7, "Skilled workers in industry, construction and craftsmen"),
    (8, "Installation and machine operators and assembly workers"),
    (9, "Unskilled workers"),
    (10, "Armed forces professions"),
    (90, "Other situation"),
    (99, "(blank)"),
    (122, "Health professionals"),
    (123, "Teachers"),
    (125, "Specialists in information and communication technologies (ICT)"),
    (131, "Intermediate level science and engineering technicians and professions"),
    (132, "Technicians and professionals of intermediate level of health"),
    (
        134,
        "Intermediate level technicians from legal, social, sports, cultural and similar services",
    ),
    (141, "Office workers, secretaries in general and data processing operators"),
    (
        143,
        "Data, accounting, statistical, financial services and registry-related operators",
    ),
    (144, "Other administrative support staff"),
    (151, "Personal service workers"),
    (152, "Sellers"),
    (153, "Personal care workers and the like"),
    (171, "Skilled construction workers and the like, except electricians"),
    (
        173,
        "Skilled workers in printing, precision instrument manufacturing, jewelers, artisans and the like",
    ),
    (
        175,
        "Workers in food processing, woodworking, clothing and other industries and crafts",
    ),
    (191, "Cleaning workers"),
    (
        192,
        "Unskilled workers in agriculture, animal production, fisheries and forestry",
    ),
    (
        193,
        "Unskilled workers in extractive industry, construction, manufacturing and transport",
    ),
    (194, "Meal preparation assistants"),
];

const ATTENDANCE: CodeList = &[(0, "Daytime"), (1, "Evening")];
const GENDER: CodeList = &[(0, "Female"), (1, "Male")];
const YES_NO: CodeList = &[(0, "No"), (1, "Yes")];

/// Every field that has a code list, in display order.
pub const CATALOGUED_FIELDS: &[&str] = &[
    fields::MARITAL_STATUS,
    fields::APPLICATION_MODE,
    fields::COURSE,
    fields::DAYTIME_EVENING_ATTENDANCE,
    fields::PREVIOUS_QUALIFICATION,
    fields::NACIONALITY,
    fields::MOTHERS_QUALIFICATION,
    fields::FATHERS_QUALIFICATION,
    fields::MOTHERS_OCCUPATION,
    fields::FATHERS_OCCUPATION,
    fields::DISPLACED,
    fields::EDUCATIONAL_SPECIAL_NEEDS,
    fields::DEBTOR,
    fields::TUITION_FEES_UP_TO_DATE,
    fields::GENDER,
    fields::SCHOLARSHIP_HOLDER,
    fields::INTERNATIONAL,
];

pub fn catalogue(field: &str) -> Option<CodeList> {
    let list = match field {
        fields::MARITAL_STATUS => MARITAL_STATUS,
        fields::APPLICATION_MODE => APPLICATION_MODE,
        fields::COURSE => COURSE,
        fields::PREVIOUS_QUALIFICATION => PREVIOUS_QUALIFICATION,
        fields::NACIONALITY => NACIONALITY,
        fields::MOTHERS_QUALIFICATION | fields::FATHERS_QUALIFICATION => PARENT_QUALIFICATION,
        fields::MOTHERS_OCCUPATION | fields::FATHERS_OCCUPATION => PARENT_OCCUPATION,
        fields::DAYTIME_EVENING_ATTENDANCE => ATTENDANCE,
        fields::GENDER => GENDER,
        fields::DISPLACED
        | fields::EDUCATIONAL_SPECIAL_NEEDS
        | fields::DEBTOR
        | fields::TUITION_FEES_UP_TO_DATE
        | fields::SCHOLARSHIP_HOLDER
        | fields::INTERNATIONAL => YES_NO,
        _ => return None,
    };
    Some(list)
}

pub fn label(field: &str, code: i64) -> Option<&'static str> {
    catalogue(field)?
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

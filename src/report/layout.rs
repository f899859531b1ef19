//! Declared fields of the application, in the order they are asked for and
//! reported. The form page and both report formats are driven from here.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Text,
    Date,
    Tel,
    Email,
    Radio {
        choices: &'static [Choice],
        default: &'static str,
    },
    Select(&'static [Choice]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub input: Input,
    pub required: bool,
}

impl FieldSpec {
    const fn new(key: &'static str, label: &'static str, input: Input) -> Self {
        Self { key, label, input, required: false }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// `type` attribute for plain inputs.
    pub fn input_type(&self) -> &'static str {
        match self.input {
            Input::Date => "date",
            Input::Tel => "tel",
            Input::Email => "email",
            _ => "text",
        }
    }

    pub fn is_radio(&self) -> bool {
        matches!(self.input, Input::Radio { .. })
    }

    pub fn is_select(&self) -> bool {
        matches!(self.input, Input::Select(_))
    }

    pub fn choices(&self) -> &'static [Choice] {
        match self.input {
            Input::Radio { choices, .. } | Input::Select(choices) => choices,
            _ => &[],
        }
    }

    pub fn is_default(&self, choice: &Choice) -> bool {
        matches!(self.input, Input::Radio { default, .. } if default == choice.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

/// A repeatable section sent as `name[index][field]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub entry_label: &'static str,
    pub fields: &'static [FieldSpec],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Section(&'static SectionSpec),
    Group(&'static GroupSpec),
}

impl Block {
    pub fn title(&self) -> &'static str {
        match self {
            Block::Section(s) => s.title,
            Block::Group(g) => g.title,
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Block::Section(s) => s.fields,
            Block::Group(g) => g.fields,
        }
    }
}

const GENDERS: &[Choice] = &[
    Choice { value: "Male", label: "Male / ذكر" },
    Choice { value: "Female", label: "Female / أنثى" },
];

const MARITAL_STATUSES: &[Choice] = &[
    Choice { value: "Single", label: "Single / أعزب" },
    Choice { value: "Married", label: "Married / متزوج" },
];

const MILITARY_STATUSES: &[Choice] = &[
    Choice { value: "Completed", label: "Completed / أدى" },
    Choice { value: "Exempted", label: "Exempted / معفي" },
    Choice { value: "Postponed", label: "Postponed / تأجيل" },
];

const YES_NO: &[Choice] = &[
    Choice { value: "Yes", label: "Yes / نعم" },
    Choice { value: "No", label: "No / لا" },
];

const LEVELS: &[Choice] = &[
    Choice { value: "Excellent", label: "Excellent / ممتاز" },
    Choice { value: "Very Good", label: "Very Good / جيد جدا" },
    Choice { value: "Good", label: "Good / جيد" },
    Choice { value: "Fair", label: "Fair / مقبول" },
];

const fn yes_no(key: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec::new(key, label, Input::Radio { choices: YES_NO, default: "No" })
}

pub const PERSONAL: SectionSpec = SectionSpec {
    title: "Personal Data / البيانات الشخصية",
    fields: &[
        FieldSpec::new("Name", "Name / الاسم بالكامل", Input::Text).required(),
        FieldSpec::new("Address", "Address / العنوان", Input::Text),
        FieldSpec::new("National_ID", "National ID No. / الرقم القومي", Input::Text),
        FieldSpec::new("Date_of_Birth", "Date of Birth / تاريخ الميلاد", Input::Date),
        FieldSpec::new("Mobile_Number", "Mobile Number / رقم المحمول", Input::Tel).required(),
        FieldSpec::new("Email_Address", "Email Address / البريد الإلكتروني", Input::Email).required(),
        FieldSpec::new("Gender", "Gender / النوع", Input::Radio { choices: GENDERS, default: "Male" }),
        FieldSpec::new(
            "Marital_Status",
            "Marital Status / الحالة الاجتماعية",
            Input::Radio { choices: MARITAL_STATUSES, default: "Single" },
        ),
        FieldSpec::new(
            "Military_Status",
            "Military Status / الموقف التجنيدي",
            Input::Radio { choices: MILITARY_STATUSES, default: "Completed" },
        ),
        yes_no("Relatives_at_EBNY", "Relatives working at EBNY Real Estate / أقارب يعملون في إبني"),
        FieldSpec::new("Relatives_Names", "Relatives Names / أسماء الأقارب", Input::Text),
        FieldSpec::new("Relation", "Relation / صلة القرابة", Input::Text),
    ],
};

pub const EMPLOYMENT: SectionSpec = SectionSpec {
    title: "Employment Data / بيانات التعيين",
    fields: &[
        FieldSpec::new("Position_Applied_For", "Position Applied For / الوظيفة المتقدم لها", Input::Text).required(),
        yes_no("Currently_Employed", "Currently Employed / هل تعمل حاليا"),
        FieldSpec::new("Current_Salary", "Current Salary / المرتب الحالي", Input::Text),
        FieldSpec::new("Expected_Salary", "Expected Salary / المرتب المتوقع", Input::Text),
        FieldSpec::new("Availability_to_Join", "Availability to Join / تاريخ الاستعداد للانضمام", Input::Date),
        yes_no("Previous_Employment_at_EBNY", "Previously Employed at EBNY / هل عملت سابقا بابني"),
        FieldSpec::new("Previous_Position", "Previous Position / اخر وظيفة", Input::Text),
        FieldSpec::new("Reasons_for_Leaving", "Reasons for Leaving / سبب ترك العمل", Input::Text),
    ],
};

pub const EDUCATION: SectionSpec = SectionSpec {
    title: "Education / التعليم",
    fields: &[
        FieldSpec::new("Certificate", "Certificate / الشهادة", Input::Text),
        FieldSpec::new("University", "University / الجامعة", Input::Text),
        FieldSpec::new("Graduation_Year", "Graduation Year / سنة التخرج", Input::Text),
        FieldSpec::new("Grade", "Grade / التقدير", Input::Text),
    ],
};

pub const EXPERIENCE: GroupSpec = GroupSpec {
    name: "Experience",
    title: "Professional Experience / الخبرة المهنية",
    entry_label: "Experience",
    fields: &[
        FieldSpec::new("CompanyName", "Company Name / اسم الشركة", Input::Text),
        FieldSpec::new("Position", "Position / الوظيفة", Input::Text),
        FieldSpec::new("StartingDate", "Starting Date / تاريخ بداية العمل", Input::Date),
        FieldSpec::new("EndingDate", "Ending Date / تاريخ نهاية العمل", Input::Date),
        FieldSpec::new("ReasonsForLeaving", "Reasons for Leaving / أسباب ترك العمل", Input::Text),
    ],
};

pub const COURSES: GroupSpec = GroupSpec {
    name: "Course",
    title: "Training Courses / الدورات التدريبية",
    entry_label: "Course",
    fields: &[
        FieldSpec::new("CourseName", "Course Name / اسم الدورة", Input::Text),
        FieldSpec::new("Institution", "Institution / مركز التدريب", Input::Text),
        FieldSpec::new("StartingDate", "Starting Date / تاريخ بداية الدورة", Input::Date),
        FieldSpec::new("EndingDate", "Ending Date / تاريخ نهاية الدورة", Input::Date),
        FieldSpec::new("TotalHours", "Total Hours / عدد الساعات", Input::Text),
    ],
};

pub const LANGUAGES: SectionSpec = SectionSpec {
    title: "Languages / اللغات",
    fields: &[
        FieldSpec::new("Language_1", "Language 1 / اللغة الأولى", Input::Text),
        FieldSpec::new("Language_1_Level", "Proficiency Level / مستوى الإجادة", Input::Select(LEVELS)),
        FieldSpec::new("Language_2", "Language 2 / اللغة الثانية", Input::Text),
        FieldSpec::new("Language_2_Level", "Proficiency Level / مستوى الإجادة", Input::Select(LEVELS)),
    ],
};

pub const COMPUTER_SKILLS: SectionSpec = SectionSpec {
    title: "Computer Skills / مهارات الحاسب الالي",
    fields: &[
        FieldSpec::new("Skill_1", "Program/Skill 1 / البرنامج 1", Input::Text),
        FieldSpec::new("Skill_1_Level", "Proficiency Level / مستوى الإجادة", Input::Select(LEVELS)),
        FieldSpec::new("Skill_2", "Program/Skill 2 / البرنامج 2", Input::Text),
        FieldSpec::new("Skill_2_Level", "Proficiency Level / مستوى الإجادة", Input::Select(LEVELS)),
    ],
};

/// Report and form order.
pub const LAYOUT: &[Block] = &[
    Block::Section(&PERSONAL),
    Block::Section(&EMPLOYMENT),
    Block::Section(&EDUCATION),
    Block::Group(&EXPERIENCE),
    Block::Group(&COURSES),
    Block::Section(&LANGUAGES),
    Block::Section(&COMPUTER_SKILLS),
];

//! Translation tables.
//!
//! Keys are the English source strings. Status keys are the lowercase
//! status names; badge keys are the glyphs themselves.

pub(super) const RU: &[(&str, &str)] = &[
    ("Upload", "Загрузить"),
    ("Analyze", "Анализировать"),
    ("Generate", "Сформировать"),
    ("Create new project", "Создать новый проект"),
    ("Upload documents", "Загрузка проектной документации"),
    ("Analyze documents with AI", "Анализ документации с помощью ИИ"),
    ("Generate reports from templates", "Формирование отчетов по шаблонам"),
    ("Enter project name:", "Введите наименование проекта:"),
    (
        "Failed to create project. Please try again.",
        "Не удалось создать проект. Пожалуйста, попробуйте еще раз.",
    ),
    ("Error creating project:", "Ошибка при создании проекта:"),
    ("No project loaded", "Проект не загружен"),
    ("Loading project...", "Загрузка проекта..."),
    ("uploaded", "Загружен"),
    ("processing", "Обработка"),
    ("completed", "Завершен"),
    ("error", "Ошибка"),
    ("Documents", "Документы"),
    ("Project", "Проект"),
    ("Section", "Раздел"),
    ("Folder", "Папка"),
    ("Document", "Документ"),
    ("КМ", "КМ - Металлические конструкции"),
    ("КЖ", "КЖ - Железобетонные конструкции"),
    ("design", "Проектная документация"),
    ("executive", "Исполнительная документация"),
    ("Create Project", "Создать проект"),
    ("Upload Documents", "Загрузить документы"),
    ("AI Analysis", "Анализ ИИ"),
    ("Report Generation", "Формирование отчетов"),
    ("✓", "✓"),
    ("...", "..."),
    ("○", "○"),
    ("✗", "✗"),
];

pub(super) const EN: &[(&str, &str)] = &[
    ("Upload", "Upload"),
    ("Analyze", "Analyze"),
    ("Generate", "Generate"),
    ("Create new project", "Create new project"),
    ("Upload documents", "Upload documents"),
    ("Analyze documents with AI", "Analyze documents with AI"),
    ("Generate reports from templates", "Generate reports from templates"),
    ("Enter project name:", "Enter project name:"),
    (
        "Failed to create project. Please try again.",
        "Failed to create project. Please try again.",
    ),
    ("Error creating project:", "Error creating project:"),
    ("No project loaded", "No project loaded"),
    ("Loading project...", "Loading project..."),
    ("uploaded", "Uploaded"),
    ("processing", "Processing"),
    ("completed", "Completed"),
    ("error", "Error"),
    ("Documents", "Documents"),
    ("Project", "Project"),
    ("Section", "Section"),
    ("Folder", "Folder"),
    ("Document", "Document"),
    ("КМ", "КМ - Metal Structures"),
    ("КЖ", "КЖ - Reinforced Concrete"),
    ("design", "Design Documentation"),
    ("executive", "Executive Documentation"),
    ("Create Project", "Create Project"),
    ("Upload Documents", "Upload Documents"),
    ("AI Analysis", "AI Analysis"),
    ("Report Generation", "Report Generation"),
    ("✓", "✓"),
    ("...", "..."),
    ("○", "○"),
    ("✗", "✗"),
];

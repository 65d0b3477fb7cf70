//! Hardcoded baseline of the built-in spelling layer.

use super::FlatDictionary;

#[rustfmt::skip]
pub const BASELINE: &[(&str, &str)] = &[
    // ѣ (yat)
    ("мне", "мнѣ"), ("нет", "нѣт"), ("свет", "свѣт"), ("дело", "дѣло"), ("тело", "тѣло"),
    ("село", "сѣло"), ("везде", "вездѣ"), ("хлеб", "хлѣб"), ("белый", "бѣлый"), ("снег", "снѣг"),
    ("след", "слѣд"), ("лето", "лѣто"), ("мед", "мѣд"), ("место", "мѣсто"), ("вера", "вѣра"),
    ("век", "вѣкъ"), ("человек", "человѣкъ"), ("левый", "лѣвый"), ("смотреть", "смотрѣть"),
    ("видеть", "видѣть"), ("сидеть", "сидѣть"), ("есть", "ѣсть"), ("смех", "смѣх"),
    ("надежда", "надѣжда"), ("зевать", "зѣвать"), ("зев", "зѣв"),
    ("гнездо", "гнѣздо"), ("слеза", "слеза"), ("железо", "желѣзо"), ("лес", "лѣс"),
    ("лесной", "лѣсной"), ("перед", "передъ"), ("медведь", "медвѣдь"), ("седло", "сѣдло"),
    ("сеять", "сѣять"), ("семья", "семья"), ("серый", "сѣрый"), ("сеть", "сѣть"),
    ("тень", "тѣнь"), ("теперь", "теперь"), ("ведать", "вѣдать"), ("весть", "вѣсть"),
    ("ответ", "отвѣт"), ("совет", "совѣт"), ("привет", "привѣт"), ("цвет", "цвѣт"),
    ("цветок", "цвѣтокъ"), ("редкий", "рѣдкій"), ("средний", "средній"), ("между", "между"),
    ("следующий", "слѣдующій"), ("надеяться", "надѣяться"), ("бедный", "бѣдный"),
    ("победа", "побѣда"), ("бежать", "бѣжать"), ("беда", "бѣда"), ("избегать", "избѣгать"),
    ("зеленый", "зеленый"), ("деньги", "деньги"), ("средство", "средство"),
    // был / была / было / были
    ("был", "былъ"), ("была", "была"), ("было", "было"), ("были", "были"),
    // -ій
    ("русский", "русскій"), ("синий", "синій"), ("какой", "какій"), ("такой", "такій"),
    ("великий", "великій"), ("старый", "старый"), ("новый", "новый"), ("другой", "другой"),
    ("третий", "третій"), ("лишний", "лишній"), ("последний", "послѣдній"),
    // terminal ъ
    ("мир", "миръ"), ("интернет", "интернетъ"), ("компьютер", "компьютеръ"),
    ("дар", "даръ"), ("стол", "столъ"), ("год", "годъ"), ("народ", "народъ"), ("город", "городъ"),
    ("сон", "сонъ"), ("кон", "конъ"), ("брат", "братъ"), ("враг", "врагъ"), ("круг", "кругъ"),
    ("друг", "другъ"), ("шаг", "шагъ"), ("бег", "бѣгъ"), ("срок", "срокъ"),
    ("знак", "знакъ"), ("вопрос", "вопросъ"), ("голос", "голосъ"), ("колос", "колосъ"),
    ("волос", "волосъ"), ("нос", "носъ"), ("смысл", "смыслъ"),
    // imperial family and titles
    ("николай", "Николай"), ("александра", "Александра"), ("татьяна", "Татьяна"),
    ("ольга", "Ольга"), ("мария", "Марія"), ("анастасия", "Анастасія"), ("алексей", "Алексѣй"),
    ("император", "императоръ"), ("императрица", "императрица"), ("цесаревич", "цесаревичъ"),
    ("князь", "князь"), ("княжна", "княжна"), ("романов", "Романовъ"), ("романовы", "Романовы"),
    // frequent nouns
    ("вечер", "вечеръ"), ("река", "рѣка"), ("неделя", "недѣля"), ("месяц", "мѣсяцъ"),
    ("отец", "отецъ"), ("сын", "сынъ"), ("муж", "мужъ"), ("лист", "листъ"), ("мост", "мостъ"),
    ("сад", "садъ"), ("дом", "домъ"), ("труд", "трудъ"), ("театр", "театръ"), ("язык", "языкъ"),
];

/// The baseline as a fresh, extendable layer.
pub fn baseline() -> FlatDictionary {
    FlatDictionary::from_pairs(BASELINE.iter().copied())
}

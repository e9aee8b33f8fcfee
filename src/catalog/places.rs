//! Hand-authored venue list for Nizhny Novgorod.
//!
//! Ids, coordinates and display fields are transcribed from the curated city
//! data set; ids are stable and intentionally non-contiguous. English and
//! Chinese name overrides exist only where they were authored.

use once_cell::sync::Lazy;

use crate::domain::category::Category;
use crate::domain::{LatLng, Place, PlaceId};
use crate::i18n::{Locale, LocalizedText};

#[allow(clippy::too_many_arguments)]
fn place(
    id: u32,
    names: LocalizedText,
    category: Category,
    lat: f64,
    lng: f64,
    hours: &str,
    schedule: &str,
    address: &str,
    contact: &str,
    link: &str,
    description: &str,
) -> Place {
    Place {
        id: PlaceId(id),
        names,
        category,
        position: LatLng::new(lat, lng),
        hours: hours.to_string(),
        schedule: schedule.to_string(),
        address: address.to_string(),
        contact: contact.to_string(),
        link: Some(link.to_string()),
        description: Some(description.to_string()),
    }
}

static PLACES: Lazy<Vec<Place>> = Lazy::new(|| {
    vec![
        place(
            1,
            LocalizedText::new("Нижегородский государственный художественный музей")
                .with(Locale::En, "Nizhny Novgorod State Art Museum")
                .with(Locale::Zh, "下诺夫哥罗德州立艺术博物馆"),
            Category::Museum,
            56.329382,
            44.012698,
            "вт,ср 10:00–18:00; чт 12:00–20:00; пт-вс 11:00–19:00",
            "Экскурсии каждый час",
            "пл. Минина и Пожарского, д. 2/2",
            "+7 910 384-21-16",
            "https://artmuseumnn.ru/",
            "Один из старейших музеев России с коллекциями русского и зарубежного искусства, включая Айвазовского, Репина и Шишкина.",
        ),
        place(
            3,
            LocalizedText::new("Арсенал – центр современного искусства")
                .with(Locale::En, "Arsenal – Center for Contemporary Art")
                .with(Locale::Zh, "阿森纳当代艺术中心"),
            Category::Museum,
            56.328139,
            44.006500,
            "вт-вс 12:00–20:00",
            "Выставки и мастер-классы",
            "Кремль, 6",
            "+7 831 422-75-55",
            "arsenal-museum.art",
            "Современная галерея в здании исторического Арсенала, где проходят выставки, лекции и фестивали современного искусства.",
        ),
        place(
            6,
            LocalizedText::new("Дворец культуры им. С. Орджоникидзе")
                .with(Locale::En, "Palace of Culture named after S. Ordzhonikidze")
                .with(Locale::Zh, "奥尔乔尼基泽文化宫"),
            Category::HouseOfCulture,
            56.331278,
            43.846308,
            "08:00–21:00",
            "Концерты, выставки и кружки",
            "ул. Чаадаева 17",
            "+7 950 600-16-15",
            "https://dksergo-nn.ru/o-nas/istoriya-dk.html",
            "Один из старейших домов культуры в городе, место проведения культурных и общественных мероприятий.",
        ),
        place(
            7,
            LocalizedText::new("Дворец культуры 'Красное Сормово'"),
            Category::HouseOfCulture,
            56.343914,
            43.862778,
            "08:00–23:00",
            "Концерты и мероприятия",
            "Юбилейный бул., 32",
            "+7 (831) 225-11-18",
            "https://vk.com/club198754807",
            "Культурный центр в Сормовском районе с регулярными событиями и кружками.",
        ),
        place(
            8,
            LocalizedText::new("Центр культуры и досуга 'Молодежный'"),
            Category::HouseOfCulture,
            56.265313,
            43.887103,
            "08:00–21:00",
            "Клубы и мастер-классы",
            "ул. Дьяконова, 25А",
            "+7 (831) 253-29-36",
            "molodezhnyj-nn.ru",
            "Пространство для молодежных мероприятий и досуга.",
        ),
        place(
            9,
            LocalizedText::new("Дворец культуры железнодорожников"),
            Category::HouseOfCulture,
            56.310245,
            43.945813,
            "08:00–22:00",
            "Театральные и музыкальные события",
            "ул. Июльских Дней, 1А",
            "+7 (831) 248-37-14",
            "http://cdkz-nn.ru",
            "Дом культуры с театральной и музыкальной программой.",
        ),
        place(
            10,
            LocalizedText::new("Дом культуры 'Газ'"),
            Category::HouseOfCulture,
            56.239689,
            43.861419,
            "09:00–18:00",
            "Тематические вечера и занятия",
            "ул. Героя Юрия Смирнова, 12",
            "+7 (831) 256-50-51",
            "https://дкгаз.рф",
            "Дом культуры при заводе ГАЗ.",
        ),
        place(
            11,
            LocalizedText::new("Дом культуры им. Свердлова"),
            Category::HouseOfCulture,
            56.322267,
            44.000941,
            "09:00–16:30",
            "Концерты и мастер-классы",
            "Большая Покровская ул., 18",
            "+7 (831) 437-38-33",
            "https://www.afisha.ru/nnovgorod/other/dk-im-sverdlova-58751/",
            "Место проведения образовательных и культурных программ.",
        ),
        place(
            12,
            LocalizedText::new("Художественная Галерея Юрковка"),
            Category::Gallery,
            56.323265,
            43.990438,
            "вт-вс 13:00–18:00",
            "Выставки современного искусства",
            "Сергиевская ул., 12",
            "+7 (920) 258-00-61",
            "ngvk.ru",
            "Галерея с экспозициями от молодых и известных художников.",
        ),
        place(
            13,
            LocalizedText::new("Галерея хрупкие мечты"),
            Category::Gallery,
            56.333123,
            43.902013,
            "вт-пн 11:00–17:00",
            "Арт-перформансы и выставки",
            "Народная ул., 2Б",
            "+7 (920) 250-05-85",
            "https://lobachevagallery.ru",
            "Нестандартное арт-пространство в центре города.",
        ),
        place(
            14,
            LocalizedText::new("FUTURO Gallery"),
            Category::Gallery,
            56.329583,
            43.994380,
            "вт-вс 12:00–20:00",
            "Современные арт-инсталляции",
            "Рождественская улица, 6",
            "+7 (831) 213-62-62",
            "https://futurogallery.ru/",
            "Галерея цифрового и экспериментального искусства.",
        ),
        place(
            15,
            LocalizedText::new("Арт-галерея Кладовка"),
            Category::Gallery,
            56.324320,
            44.003153,
            "вт-вс 11:00–18:00",
            "Выставки и мастер-классы",
            "Большая Покровская улица, 8",
            "+7 951 903-56-99",
            "https://ngiamz.ru/kladovka-galereya-istoriy",
            "Творческое пространство для художников и зрителей.",
        ),
        place(
            18,
            LocalizedText::new("ЦЕХ"),
            Category::Gallery,
            56.322352,
            44.011871,
            "вт-вс 12:00–21:00",
            "Арт-проекты и визуальные исследования",
            "Варварская ул., 32",
            "+7 (920) 252-37-63",
            "https://tseh.space",
            "Индустриальное пространство с креативными выставками.",
        ),
        place(
            20,
            LocalizedText::new("Галерея шоколада"),
            Category::Gallery,
            56.352328,
            43.870973,
            "пн-пт 10:00–17:00",
            "Выставки сладкого искусства",
            "ул. Дмитрия Павлова, 13А",
            "+7 (831) 274-66-80",
            "https://shokolad52.ru",
            "Необычная галерея, объединяющая искусство и кулинарию.",
        ),
        place(
            21,
            LocalizedText::new("Центральная районная библиотека им. Т.Г. Шевченко"),
            Category::Library,
            56.269924,
            43.976798,
            "10:00–18:00",
            "Клубы, лекции, читальные залы",
            "просп. Гагарина, 112",
            "+7 (831) 465-21-22",
            "https://приокбиблио.рф",
            "Одна из старейших районных библиотек города.",
        ),
        place(
            22,
            LocalizedText::new(
                "Нижегородская государственная областная универсальная научная библиотека им. В.И. Ленина",
            ),
            Category::Library,
            56.325131,
            44.007534,
            "пн-чт 09:00–20:00; пт-вс 10:00–18:00",
            "Выставки, встречи, архивы",
            "Варварская улица, 3",
            "+7 831 419-41-54",
            "ngounb.ru",
            "Главная библиотека области с огромным книжным фондом.",
        ),
        place(
            23,
            LocalizedText::new("Библиотека им. С.В. Михалкова"),
            Category::Library,
            56.262030,
            44.002500,
            "пн-пт 09:30–18:00; вс 09:00–17:30",
            "Детские чтения и мероприятия",
            "Анкудиновское шоссе, 30",
            "+7 (831) 431-25-14",
            "https://приокбиблио.рф",
            "Детская библиотека с творческими программами.",
        ),
        place(
            24,
            LocalizedText::new("Центральная библиотека им. В.И. Ленина г. Нижнего Новгорода"),
            Category::Library,
            56.324000,
            43.956547,
            "09:00–19:00",
            "Книжные клубы и выставки",
            "Советская ул., 16",
            "+7 (831) 246-41-02",
            "https://biblionn.ru",
            "Крупнейшая библиотека региона, предлагающая читателям доступ к обширному фонду книг и образовательным мероприятиям.",
        ),
        place(
            25,
            LocalizedText::new("Библиотека им. А.С. Попова"),
            Category::Library,
            56.256701,
            43.985986,
            "пн-пт 09:30–18:00; вс 09:00–17:30",
            "Литературные вечера",
            "Горная ул., 30",
            "+7 (831) 465-01-93",
            "https://приокбиблио.рф",
            "Культурный центр с регулярными встречами читателей.",
        ),
        place(
            26,
            LocalizedText::new("Центральная районная библиотека им. А.С. Пушкина г. Нижний Новгород"),
            Category::Library,
            56.329271,
            43.872270,
            "пн-пт 10:00–18:00; вс 10:00–17:00",
            "Клубы и выставки",
            "Березовская ул., 96А",
            "+7 (831) 224-58-80",
            "https://biblmr.r52.ru",
            "Крупная библиотека с богатой программой.",
        ),
        place(
            27,
            LocalizedText::new("Кафе Biblioteca"),
            Category::Library,
            56.317135,
            43.995079,
            "11:00–22:00",
            "Кафе и книжный уголок",
            "Большая Покровская ул., 46",
            "+7 (831) 433-69-34",
            "https://biblioteca-nn.ru",
            "Уютное место для кофе и чтения.",
        ),
        place(
            28,
            LocalizedText::new(
                "Нижегородский государственный академический театр драмы имени М. Горького",
            ),
            Category::Theater,
            56.324128,
            44.001458,
            "10:00–13:20;14:00–16:00;16:15–20:00",
            "Спектакли ежедневно",
            "Большая Покровская ул., 13",
            "+7 (831) 419-51-73",
            "https://drama.nnov.ru",
            "Один из старейших театров России с богатым репертуаром.",
        ),
        place(
            29,
            LocalizedText::new("Нижегородский театр комедии"),
            Category::Theater,
            56.320387,
            44.002252,
            "10:00–22:00",
            "Комедийные постановки",
            "Грузинская улица, 23",
            "+7 831 434-04-24",
            "https://comedy.nnov.ru",
            "Театр, специализирующийся на лёгких и весёлых спектаклях.",
        ),
        place(
            30,
            LocalizedText::new("Театр юного зрителя"),
            Category::Theater,
            56.316545,
            44.010511,
            "10:00–14:15;15:00–19:00",
            "Детские спектакли и программы",
            "ул. Максима Горького, 145",
            "+7 (831) 428-00-00",
            "https://tyuz.ru",
            "Театр для детей и подростков с увлекательными постановками.",
        ),
        place(
            31,
            LocalizedText::new(
                "Нижегородский государственный академический театр оперы и балета имени А. С. Пушкина",
            ),
            Category::Theater,
            56.315830,
            44.016955,
            "10:30–20:00",
            "Опера и балет",
            "ул. Белинского, 59",
            "+7 831 234 05 34",
            "https://www.operann.ru/",
            "Главный оперный театр города с богатой историей.",
        ),
        place(
            32,
            LocalizedText::new("Нижегородский государственный академический театр кукол"),
            Category::Theater,
            56.318407,
            43.995999,
            "10:00–18:30",
            "Кукольные представления",
            "Большая Покровская ул., 39Б",
            "+7 (831) 215-12-00",
            "https://www.ngatk.ru",
            "Сказочный театр для детей и семейного просмотра.",
        ),
        place(
            33,
            LocalizedText::new("Нетеатр"),
            Category::Theater,
            56.324691,
            44.004150,
            "11:00–22:00",
            "Современные спектакли",
            "Большая Покровская ул., 4Д",
            "+7 (930) 665-00-13",
            "https://neteatr.ru/",
            "Независимый театр с экспериментальными постановками.",
        ),
        place(
            34,
            LocalizedText::new("Академия видео Ты-звезда"),
            Category::ArtSchool,
            56.315376,
            44.022255,
            "пн-пт 16:45–21:00; сб-вс 10:00–18:00",
            "Занятия ежедневно",
            "ул. Дунаева, 8",
            "+7 (915) 933-02-02",
            "https://akademia.planet-t.ru",
            "Креативная студия для будущих видеоблогеров.",
        ),
        place(
            35,
            LocalizedText::new("Детская школа искусств №8 им. В. Ю. Виллуана"),
            Category::ArtSchool,
            56.324132,
            44.008804,
            "пн-чт 08:30–17:30; пт 08:30–16:30",
            "Музыкальные и художественные классы",
            "Варварская ул., 5",
            "+7 (831) 419-87-49",
            "https://villuanschool.ru",
            "Одна из ведущих школ искусств в Нижнем Новгороде.",
        ),
        place(
            36,
            LocalizedText::new("Детская школа искусств №6 им. А. А. Касьянова"),
            Category::ArtSchool,
            56.282903,
            44.037620,
            "пн-сб 09:00–20:00",
            "Музыкальные отделения",
            "ул. Маршала Рокоссовского, 10",
            "+7 (831) 214-09-66",
            "http://www.дши6.рф",
            "Образовательное учреждение с богатой историей.",
        ),
    ]
});

/// The built-in venue list, in authoring order.
pub fn places() -> &'static [Place] {
    &PLACES
}

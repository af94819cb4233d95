//! Built-in moderation term lists.
//!
//! All entries are lowercase. Multi-word entries are matched as phrases.

/// Terms whose presence marks a text as prohibited.
pub const PROHIBITED_TERMS: &[&str] = &[
    // Drugs and narcotics
    "drug", "drugs", "cocaine", "heroin", "methamphetamine", "crystal meth", "fentanyl",
    "opioid", "lsd", "ecstasy", "mdma", "marijuana", "cannabis", "hashish", "psychedelic",
    "drogen", "droge", "marihuana", "haschisch", "koks", "kokain", "amphetamin", "speed",
    "xtc", "pilze", "magic mushrooms", "spice", "kräutermischung", "badesalz",
    "synthetische drogen", "designer drogen", "legal highs", "drogenhandel",
    "drogenschmuggel", "drogenlabor", "drogenküche", "drogenproduktion", "carfentanil",
    "morphin", "opium", "opiate", "methadon", "subutex", "suboxone", "oxycodon",
    "hydrocodon", "fentanyl patches", "fentanyl pflaster", "meth", "amphetamine", "molly",
    "acid", "psilocybin", "ketamin", "keta", "ghb", "liquid ecstasy", "rohypnol",
    "roofies", "date rape drug", "vergewaltigungsdroge", "synthetische cannabinoide",
    "mephedrone", "mcat", "krokodil", "desomorphine", "crocodile", "flakka", "alpha pvp",
    "n-bomb", "25i nbome", "2cb", "2ci", "2ce", "dmt", "ayahuasca", "ibogain", "kratom",
    "kava", "salvia", "bufotenin",

    // Insults and slurs
    "fick", "ficken", "fick dich", "scheiße", "scheiß", "scheißen", "arsch", "arschloch",
    "hurensohn", "hure", "fotze", "wichser", "spasti", "behinderte", "behindert",
    "schwuchtel", "schwul", "dummkopf", "idiot", "trottel", "depp", "vollidiot",
    "blödmann", "sau", "schwein", "hund", "hundesohn", "miststück", "bitch", "nutte",
    "schlampe", "dirne", "flittchen", "trampel", "klotz", "holzkopf", "dödel", "penner",
    "asozial", "abartig", "ekelhaft", "widerlich", "abscheulich", "verabscheuungswürdig",
    "fotzen", "fotzenloch", "muschi", "pussy", "cunt", "cunts", "wichsen", "masturbieren",
    "onanieren", "wixxer", "wixxen", "fotzenficker", "arschficker", "schwanzlutscher",
    "schwanz", "penis", "pimmel", "eier", "balls", "hoden", "titten", "tits", "boobs",
    "brüste", "nippel", "nips", "busen", "hintern", "backside", "butt", "buttocks",
    "pisse", "pissen", "pisser", "pissers", "pisskopf", "bastard", "bastards", "bitches",
    "whore", "whores", "slut", "sluts", "slutty", "tramp", "tramps", "trampy", "skank",
    "skanks", "skanky", "ho", "hos", "hoe", "hoes", "hooker", "hookers", "prostitute",
    "prostitutes", "escort", "escorts", "call girl", "call girls", "stripper", "strippers",
    "porn star", "porn stars", "pornstar", "pornstars", "lesbe", "trans", "mongoloid",
    "retard", "cock", "dick", "ass", "po", "fuck", "fucking", "fucked", "fucker",
    "fuckers", "shit", "shitting", "shitted", "shitter", "shitters", "piss", "pissing",
    "pissed", "nigger", "niggers", "nigga", "niggas", "niggah", "niggahs", "chink",
    "chinks", "chinky", "gook", "gooks", "gooky", "spic", "spics", "spicky", "wetback",
    "wetbacks", "towelhead", "towelheads", "sand nigger", "sand niggers", "camel jockey",
    "camel jockeys", "raghead", "ragheads", "kike", "kikes", "kyke", "kykes", "heeb",
    "heebs", "yid", "yids", "yiddish", "jew", "jews", "jewish", "muslim", "muslims",
    "islamic", "islam", "mohammedan", "mohammedans", "arab", "arabs", "arabic", "persian",
    "persians", "iranian", "iranians", "iraqi", "iraqis", "afghan", "afghans",
    "afghanistani", "afghanistanis", "pakistani", "pakistanis", "indian", "indians",
    "native", "natives", "redskin", "redskins", "red man", "red men", "squaw", "squaws",
    "injun", "injuns", "chief", "chiefs", "fag", "fags", "faggot", "faggots", "faggy",
    "faggoty", "queer", "queers", "queerly", "queerish", "dyke", "dykes", "dike", "dikes",
    "dikey", "lesbian", "lesbians", "lesbo", "lesbos", "lesboish", "tranny", "trannies",
    "trannie", "shemale", "shemales", "ladyboy", "ladyboys", "chick with dick",
    "chicks with dicks", "dickgirl", "dickgirls", "dick girl", "dick girls", "trap",
    "traps", "trappy", "retards", "retarded", "retardation", "spastic", "spastics", "spaz",
    "spazz", "spazzes", "spazzy", "cripple", "cripples", "crippled", "crippling", "lame",
    "lamer", "lamest", "lamely", "lameness", "dumb", "dumber", "dumbest", "dumbly",
    "dumbness", "stupid", "stupider", "stupidest", "stupidly", "stupidity", "moron",
    "morons", "moronic", "moronically", "idiots", "idiotic", "idiotically", "imbecile",
    "imbeciles", "imbecilic", "imbecilically", "cretin", "cretins", "cretinous",
    "cretinously", "mongoloids", "mongoloidic", "mongoloidically", "down syndrome",
    "downs syndrome", "trisomy 21", "autistic", "autism", "asperger", "aspergers",
    "asperger syndrome", "aspergers syndrome", "adhd", "add", "attention deficit",
    "hyperactive", "hyperactivity", "learning disability", "learning disabled",
    "mentally retarded", "mentally handicapped", "mentally challenged",
    "developmentally disabled", "special needs", "special ed", "special education",
    "wheelchair bound", "wheelchair user", "paraplegic", "paraplegics", "quadriplegic",
    "quadriplegics", "amputee", "amputees", "blind", "blindness", "deaf", "deafness",
    "mute", "muteness", "stutter", "stuttering", "stammer", "stammering", "lisp",
    "lisping", "stutterer", "stutterers", "stammerer", "stammerers", "lisper", "lispers",
    "stuttery", "stammery", "lispy",

    // Weapons
    "waffe", "waffen", "pistole", "gewehr", "revolver", "schrotflinte", "granate", "bombe",
    "sprengstoff", "munition", "illegale waffen", "waffenhandel", "waffenverkauf",
    "waffenhändler", "sturmgewehr", "messer", "dolch", "machete", "keule", "knüppel",
    "schlagstock", "weapon", "weapons", "gun", "rifle", "pistol", "shotgun", "grenade",
    "bomb", "explosive", "ammunition", "illegal arms", "arms deal", "gun sale",
    "gun dealer", "assault rifle", "ak47", "kalaschnikow", "uzi", "mp5", "glock",
    "beretta", "colt", "magnum", "sniper", "scharfschütze", "sniper rifle",
    "scharfschützengewehr", "granatwerfer", "mörser", "panzerfaust", "rpg",
    "raketenwerfer", "minen", "landminen", "handgranaten", "sprengkörper", "bomben",
    "selbstmordattentäter", "bombengürtel", "sprengstoffgürtel",

    // Stolen and counterfeit goods
    "gestohlen", "gestohlenes auto", "gestohlene ware", "raub", "diebstahl", "gefälscht",
    "fake ausweis", "gefälschter ausweis", "fake diplom", "gefälschtes diplom",
    "fälschung", "gefälschte dokumente", "gefälschter reisepass", "betrug", "betrügerisch",
    "stolen", "stolen car", "stolen goods", "robbery", "theft", "fake", "fake id",
    "fake diploma", "counterfeit", "forged", "forged documents", "forged passport",

    // Financial fraud
    "betrüger", "schwindel", "pyramidensystem", "ponzi-schema", "geldwäsche",
    "steuerhinterziehung", "kreditbetrug", "identitätsdiebstahl", "kreditkartenbetrug",
    "scheckbetrug", "überweisungsbetrug", "finanzbetrug", "anlagebetrug",
    "investmentbetrug", "schneeballsystem", "fraud", "scam", "pyramid scheme", "ponzi",
    "money laundering", "tax evasion", "loan fraud", "identity theft", "credit card fraud",
    "check fraud", "wire fraud",

    // Sexual exploitation
    "menschenhandel", "sexhandel", "prostitution", "prostituierte", "escort service",
    "begleitdienst", "kinderausbeutung", "kindesmissbrauch", "kindeswohlgefährdung",
    "sexueller missbrauch", "vergewaltigung", "sexuelle nötigung", "pädophilie",
    "kinderpornografie", "sex trafficking", "human trafficking", "child exploitation",
    "child abuse", "child endangerment", "pornografie", "porno", "hardcore", "softcore",
    "fetisch", "bdsm", "sadomasochismus", "voyeurismus", "exhibitionismus", "zoophilie",
    "nekrophilie", "jugendpornografie", "vergewaltiger", "pädophiler",
    "kinderprostitution", "jugendprostitution", "sexuelle belästigung", "stalking",
    "stalker", "voyeur", "exhibitionist", "bestialität", "nekrophil", "fetischist",
    "paraphilie",

    // Forged documents and academic fraud
    "diplomfabrik", "abschlussfabrik", "aufsatzfabrik", "hausaufgabenhilfe",
    "aufsatzschreiben", "universitätszulassung hilfe", "plagiat", "gefälschtes zertifikat",
    "fake zertifikat", "gefälschter abschluss", "fake abschluss", "spickzettel",
    "abschreiben", "diploma mill", "degree mill", "essay mill", "homework help",
    "essay writing", "university admission help", "cheating", "plagiarism",
    "fake certificate",

    // Hate speech and discrimination
    "hassrede", "hass", "rassismus", "rassistisch", "rassist", "sexismus", "sexistisch",
    "sexist", "homophob", "homophobie", "fremdenfeindlichkeit", "xenophobie",
    "diskriminierung", "diskriminierend", "antisemitismus", "antisemitisch",
    "islamophobie", "islamfeindlich", "fremdenhass", "ausländerfeindlich", "rechtsradikal",
    "extremistisch", "ausländer", "ausländerin", "flüchtling", "flüchtlinge",
    "flüchtlingsfeindlich", "nur für deutsche", "keine ausländer", "deutsche zuerst",
    "ausländer raus", "fremde raus", "deutschland den deutschen", "weiße zuerst",
    "keine farbigen", "nur für weiße", "keine schwarzen", "keine muslime",
    "islam gehört nicht hierher", "junge mädchen", "junge frauen", "junge damen",
    "junge weiber", "junge schlampen", "junge nutten", "junge huren", "junge fotzen",
    "junge mädchen verfügbar", "junge mädchen zum verkauf", "junge mädchen service",
    "junge mädchen escort", "junge mädchen prostitution", "junge mädchen sex",
    "junge mädchen porn", "junge mädchen nackt", "junge mädchen nacktbilder",
    "junge mädchen videos", "junge mädchen cam", "junge mädchen webcam", "hate speech",
    "racism", "racist", "sexism", "homophobic", "xenophobia", "discrimination",

    // Animal and environmental crime
    "tierquälerei", "tierquäler", "wilderei", "wildern", "bedrohte arten", "illegale jagd",
    "elfenbeinhandel", "tierhandel", "wildtierhandel", "artenschmuggel",
    "illegaler tierhandel", "tierschutzverletzung", "umweltverbrechen",
    "illegale entsorgung", "giftmüll", "animal abuse", "poaching", "endangered species",
    "illegal hunting", "ivory trading", "animal trafficking",

    // Cybercrime
    "hacking", "hacker", "exploit", "malware", "ransomware", "ddos", "cyberkriminalität",
    "cybercrime", "fälschen", "unterschlagung", "bestechung", "erpressung", "erpresser",
    "illegales glücksspiel", "wettsystem", "sanktionsverletzung", "embargo",
    "computerbetrug", "internetbetrug", "online-betrug", "phishing", "trojaner", "virus",
    "wurm", "keylogger", "spyware", "counterfeiting", "forgery", "embezzlement", "bribery",
    "extortion", "blackmail", "illegal gambling", "betting scheme", "sanctions violation",
    "phishing mail", "cryptolocker", "wannacry", "petya", "notpetya", "adware", "rootkit",
    "backdoor", "hintertür", "ddos attack", "botnet", "zombie computer",
    "cryptocurrency mining", "bitcoin mining", "cryptocurrency", "darknet", "tor",
    "anonymizer", "banking trojan", "banking malware", "online banking betrug",

    // Violence
    "mord", "mörder", "töten", "umbringen", "ermorden", "massaker", "amoklauf",
    "terroranschlag", "anschlag", "bombenanschlag", "selbstmord", "selbstmordattentat",
    "geiselnahme", "entführung", "folter", "foltern", "vergewaltigen", "mörderisch",
    "tödlich", "lebensgefährlich", "school shooting", "schulmassaker",
    "workplace violence", "arbeitsplatzgewalt", "familienmord", "familientragödie",
    "mordserie", "serienmörder", "psychopath", "soziopath", "antisozial", "kidnapping",
    "verstümmelung", "amputation", "kastration", "verstümmeln", "brandstiftung", "arson",
    "sabotage", "sabotageakt", "vandalismus", "terrorismus", "terrorist", "terroristisch",
    "attentat", "handgranate", "explosiv", "dynamit", "tnt", "c4", "semtex",
    "nitroglycerin", "ammoniumnitrat", "bombenbau", "sprengstoffherstellung",
    "bombenbastler", "bombenbauer",

    // Extremism and terrorism
    "islamistisch", "islamist", "radikal", "extremist", "nazi", "nationalsozialist",
    "linksradikal", "faschist", "faschistisch", "antisemit", "holocaust leugner",
    "revisionist", "neonazi", "skinhead", "hooligan", "flugzeugentführung", "hijacking",
    "infrastruktur", "kritische infrastruktur", "wasserwerk", "kraftwerk", "atomkraftwerk",
    "chemieanlage", "biowaffe", "chemiewaffe", "atomwaffe", "nuklearwaffe", "hitler",
    "adolf hitler", "holocaust", "ultras", "hooligans", "antifa", "antifaschist",
    "kommunist", "kommunistisch", "anarchist", "anarchistisch", "salafist", "salafistisch",
    "wahhabist", "wahhabistisch", "jihadist", "jihadistisch", "mudschahedin", "taliban",
    "al qaida", "isis", "isil", "daesh", "boko haram", "al shabaab", "hamas", "hisbollah",

    // Organised crime
    "mafia", "clan", "clan kriminalität", "bande", "verbrecherbande", "schutzgeld",
    "wucher", "wucherer", "kredithai", "illegale geschäfte", "schwarzarbeit", "schmuggel",
    "schmuggler", "hehler", "hehlerei", "räuber", "cosa nostra", "camorra", "ndrangheta",
    "sacra corona unita", "yakuza", "triaden", "triade", "kartell", "drogenkartell",
    "medellin kartell", "sinaloa kartell", "gulf kartell", "zetas", "arabische clans",
    "türkische clans", "kurdische clans", "libanesische clans", "pizzo", "racketeering",
    "kredithaie", "überfall", "überfälle", "einbruch", "einbrüche",

    // Dangerous substances
    "gift", "giftig", "vergiftung", "vergiften", "cyanid", "arsen", "strychnin", "ricin",
    "sarin", "tabun", "soman", "vx", "novichok", "chlor", "phosgen", "mustard gas",
    "senfgas", "tränengas", "cs gas",

    // Human trafficking
    "sklaverei", "versklavung", "zwangsarbeit", "zwangsprostitution", "kinderhandel",
    "organhandel", "leichenhandel", "körperteile", "organe", "niere", "leber", "herz",
    "zwangsheirat", "ehehandel", "bräutigam", "bräutigamhandel",

    // Conspiracy ideologies
    "verschwörungstheorie", "verschwörung", "illuminaten", "freimaurer", "reptilien",
    "reptiloiden", "flache erde", "flat earth", "chemtrails", "impfgegner", "anti vaxxer",
    "qanon", "q anon", "pizzagate", "adrenochrome", "satanisten", "satanistisch",
    "ritualmord", "blutopfer", "menschliches opfer", "kinderopfer",
];

/// Benign terms sharing vocabulary with prohibited ones. A hit switches the
/// filter from substring matching to whole-token matching.
pub const WHITELIST_TERMS: &[&str] = &[
    "personal", "fachkräften", "fachkraft", "fachkräfte", "personalbereich",
    "personalabteilung", "personalmanagement", "personalwesen", "personalchef",
    "personalberatung", "personalentwicklung", "personalplanung", "personalverwaltung",
    "junge", "junger", "jungen", "jünger", "jüngere", "jüngster", "jüngste", "junge leute",
    "junge menschen", "junge generation", "junge generationen", "junge unternehmer",
    "junge künstler", "junge musiker", "junge sportler", "junge wissenschaftler",
    "junge forscher", "junge entwickler", "junge programmierer", "junge designer",
    "junge architekten", "junge ärzte", "junge lehrer", "junge studenten", "junge schüler",
    "junge kinder", "junge erwachsene", "junge familie", "junge eltern", "junge paare",
    "junge liebende", "junge freunde", "junge kollegen", "junge mitarbeiter", "junge team",
    "junge gruppe", "junge gemeinschaft", "junge gesellschaft", "junge welt",
    "junge zukunft", "junge hoffnung", "junge träume", "junge ideen", "junge projekte",
    "junge unternehmen", "junge startups", "junge innovationen", "junge technologien",
    "junge lösungen", "junge ansätze", "junge methoden", "junge konzepte",
    "junge strategien", "junge pläne", "junge ziele", "junge visionen", "junge missionen",
    "junge aufgaben", "junge verantwortung", "junge führung", "junge leitung",
    "junge management", "junge organisation", "junge struktur", "junge systeme",
    "junge prozesse", "junge abläufe", "junge entwicklungen", "junge trends",
    "junge richtungen", "junge wege", "junge möglichkeiten", "junge chancen",
    "junge gelegenheiten", "junge potentiale", "junge talente", "junge begabungen",
    "junge fähigkeiten", "junge kompetenzen", "junge erfahrungen", "junge kenntnisse",
    "junge wissen", "junge bildung", "junge ausbildung", "junge qualifikation",
    "junge spezialisierung", "junge expertise", "junge profession", "junge beruf",
    "junge karriere", "junge erfolg", "junge leistung", "junge arbeit", "junge tätigkeit",
    "junge beschäftigung", "junge job", "junge position", "junge rolle", "junge funktion",
    "junge aufgabe", "junge pflicht", "junge engagement", "junge begeisterung",
    "junge motivation", "junge energie", "junge kraft", "junge stärke", "junge mut",
    "junge entschlossenheit",
];

/// Phrases that are always blocked, even when a whitelist term is present.
pub const EXCEPTION_PHRASES: &[&str] = &[
    "junge mädchen", "junge frauen", "junge damen", "junge weiber", "junge schlampen",
    "junge nutten", "junge huren", "junge fotzen", "junge mädchen verfügbar",
    "junge mädchen zum verkauf", "junge mädchen service", "junge mädchen escort",
    "junge mädchen prostitution", "junge mädchen sex", "junge mädchen porn",
    "junge mädchen nackt", "junge mädchen nacktbilder", "junge mädchen videos",
    "junge mädchen cam", "junge mädchen webcam",
];

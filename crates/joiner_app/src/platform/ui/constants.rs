pub const PROMPT: &str = "> ";

pub const HELP_LINES: &[&str] = &[
    "Commands (positions start at 1):",
    "  add <paths...>        add files to the end of the list",
    "  remove <n>            remove the file at position n",
    "  order <n...>          set the whole order, e.g. `order 3 1 2`",
    "  drag <n>              pick up the file at position n",
    "  over <n>              move the picked-up file over position n",
    "  drop                  release the picked-up file",
    "  move <from> <to>      drag a file from one position to another",
    "  join                  read and join all files in order",
    "  format <ext>          txt, js, jsx, ts, tsx, json, html, css or md",
    "  download              save the joined text",
    "  show                  print the full joined text",
    "  list                  print the file list",
    "  clear                 remove all files",
    "  help                  show this help",
    "  quit                  leave",
];
